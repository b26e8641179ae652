//! R-tree backed remaining-point set.

use rstar::primitives::GeomWithData;
use rstar::RTree;

use super::search::NearestSearch;
use crate::models::Point;

type Entry = GeomWithData<[f64; 2], usize>;

/// Remaining set backed by an [`rstar::RTree`].
///
/// Queries walk candidates in order of increasing squared distance and stop
/// once the distance grows past the first hit, so equidistant candidates are
/// all considered and the lowest index wins, as with [`LinearScan`].
///
/// [`LinearScan`]: super::LinearScan
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::distance::{NearestSearch, RTreeSearch};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let mut search = RTreeSearch::new(&points, 1..points.len());
/// assert_eq!(search.nearest(points[0]), Some(2));
/// assert!(search.remove(2));
/// assert_eq!(search.nearest(points[0]), Some(1));
/// ```
pub struct RTreeSearch<'a> {
    points: &'a [Point],
    tree: RTree<Entry>,
}

impl<'a> RTreeSearch<'a> {
    /// Bulk-loads a tree over `candidates`, which index into `points`.
    ///
    /// # Panics
    ///
    /// Panics if a candidate index is out of bounds.
    pub fn new(points: &'a [Point], candidates: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = candidates.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        let entries: Vec<Entry> = indices
            .into_iter()
            .map(|i| GeomWithData::new(points[i].to_array(), i))
            .collect();
        Self {
            points,
            tree: RTree::bulk_load(entries),
        }
    }
}

impl NearestSearch for RTreeSearch<'_> {
    fn nearest(&self, from: Point) -> Option<usize> {
        let mut hits = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&from.to_array());
        let (first, best_d2) = hits.next()?;
        let mut best = first.data;
        for (entry, d2) in hits {
            if d2 > best_d2 {
                break;
            }
            best = best.min(entry.data);
        }
        Some(best)
    }

    fn remove(&mut self, index: usize) -> bool {
        let Some(point) = self.points.get(index) else {
            return false;
        };
        self.tree
            .remove(&GeomWithData::new(point.to_array(), index))
            .is_some()
    }

    fn len(&self) -> usize {
        self.tree.size()
    }

    fn remaining(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.tree.iter().map(|e| e.data).collect();
        out.sort_unstable();
        out
    }
}
