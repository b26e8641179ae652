//! Remaining-point sets with nearest-point queries.

use log::warn;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use super::euclidean::distance_squared;
use crate::models::Point;

/// Below this many live points the parallel scan runs on the calling
/// thread.
const PARALLEL_THRESHOLD: usize = 2048;

/// Smallest slice of live points handed to one rayon job.
const MIN_CHUNK: usize = 1024;

const ABSENT: usize = usize::MAX;

/// Which [`NearestSearch`] implementation backs the remaining-points set.
///
/// All strategies return the same nearest point for the same query,
/// including the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Sequential scan over the live points.
    #[default]
    Linear,
    /// Scan split across a rayon pool with a final min-reduction.
    Parallel,
    /// R-tree spatial index.
    #[serde(rename = "rtree")]
    RTree,
}

/// A shrinking set of candidate points answering nearest-point queries.
///
/// Candidates are identified by their index in the input slice. When several
/// candidates are equally near, the one with the lowest index wins.
pub trait NearestSearch {
    /// Returns the index of the live candidate nearest to `from`, or `None`
    /// if the set is empty.
    fn nearest(&self, from: Point) -> Option<usize>;

    /// Removes a candidate. Returns `false` if it was not present.
    fn remove(&mut self, index: usize) -> bool;

    /// Number of live candidates.
    fn len(&self) -> usize;

    /// Returns `true` if no candidates remain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live candidate indices in ascending order.
    fn remaining(&self) -> Vec<usize>;
}

/// Picks the nearer of two `(squared distance, index)` candidates, breaking
/// ties on the lower index.
fn closer(a: (f64, usize), b: (f64, usize)) -> (f64, usize) {
    if b.0 < a.0 || (b.0 == a.0 && b.1 < a.1) {
        b
    } else {
        a
    }
}

fn scan(points: &[Point], candidates: &[usize], from: Point) -> Option<(f64, usize)> {
    candidates
        .iter()
        .map(|&i| (distance_squared(from, points[i]), i))
        .reduce(closer)
}

/// Remaining set backed by a dense array of live indices.
///
/// Removal is O(1) (swap-remove plus a position table), so iteration order
/// drifts from input order; the tie-break does not depend on it.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::distance::{LinearScan, NearestSearch};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let mut search = LinearScan::new(&points, 1..points.len());
/// assert_eq!(search.nearest(points[0]), Some(2));
/// search.remove(2);
/// assert_eq!(search.nearest(points[0]), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct LinearScan<'a> {
    points: &'a [Point],
    live: Vec<usize>,
    slot: Vec<usize>,
}

impl<'a> LinearScan<'a> {
    /// Creates a set over `candidates`, which index into `points`.
    ///
    /// # Panics
    ///
    /// Panics if a candidate index is out of bounds.
    pub fn new(points: &'a [Point], candidates: impl IntoIterator<Item = usize>) -> Self {
        let mut slot = vec![ABSENT; points.len()];
        let mut live = Vec::new();
        for i in candidates {
            if slot[i] == ABSENT {
                slot[i] = live.len();
                live.push(i);
            }
        }
        Self { points, live, slot }
    }
}

impl NearestSearch for LinearScan<'_> {
    fn nearest(&self, from: Point) -> Option<usize> {
        scan(self.points, &self.live, from).map(|(_, i)| i)
    }

    fn remove(&mut self, index: usize) -> bool {
        let pos = match self.slot.get(index) {
            Some(&pos) if pos != ABSENT => pos,
            _ => return false,
        };
        self.live.swap_remove(pos);
        if let Some(&moved) = self.live.get(pos) {
            self.slot[moved] = pos;
        }
        self.slot[index] = ABSENT;
        true
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn remaining(&self) -> Vec<usize> {
        let mut out = self.live.clone();
        out.sort_unstable();
        out
    }
}

/// [`LinearScan`] whose query is split across a rayon pool, then reduced
/// to the single nearest candidate.
#[derive(Debug)]
pub struct ParallelScan<'a> {
    inner: LinearScan<'a>,
    threads: usize,
    pool: Option<ThreadPool>,
}

impl<'a> ParallelScan<'a> {
    /// Creates a parallel set. `threads == 0` runs on rayon's global pool,
    /// `threads == 1` scans on the calling thread, and larger counts get a
    /// dedicated pool of that size.
    pub fn new(
        points: &'a [Point],
        candidates: impl IntoIterator<Item = usize>,
        threads: usize,
    ) -> Self {
        let pool = if threads > 1 {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| warn!("rayon pool of {threads} threads: {e}; using the global pool"))
                .ok()
        } else {
            None
        };
        Self {
            inner: LinearScan::new(points, candidates),
            threads,
            pool,
        }
    }
}

impl NearestSearch for ParallelScan<'_> {
    fn nearest(&self, from: Point) -> Option<usize> {
        let live = &self.inner.live;
        if self.threads == 1 || live.len() < PARALLEL_THRESHOLD {
            return self.inner.nearest(from);
        }

        let points = self.inner.points;
        let query = || {
            live.par_iter()
                .with_min_len(MIN_CHUNK)
                .map(|&i| (distance_squared(from, points[i]), i))
                .reduce_with(closer)
        };
        match &self.pool {
            Some(pool) => pool.install(query),
            None => query(),
        }
        .map(|(_, i)| i)
    }

    fn remove(&mut self, index: usize) -> bool {
        self.inner.remove(index)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn remaining(&self) -> Vec<usize> {
        self.inner.remaining()
    }
}
