//! Distances and nearest-point search.
//!
//! Provides the Euclidean distance primitive and the remaining-points
//! structures the route builder queries for the nearest unvisited point.
//!
//! - [`LinearScan`] — indexed array scan, O(n) per query
//! - [`ParallelScan`] — the same scan split across a rayon pool
//! - [`RTreeSearch`] — R-tree spatial index, sublinear per query

mod euclidean;
mod rtree;
mod search;

pub use euclidean::{distance, distance_squared};
pub use rtree::RTreeSearch;
pub use search::{LinearScan, NearestSearch, ParallelScan, SearchStrategy};
