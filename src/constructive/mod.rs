//! Constructive heuristics for building budget-limited routes.
//!
//! - [`build_route`] / [`AutonomyRouteBuilder`] — greedy nearest-neighbor
//!   construction that returns to the origin once the next point would be
//!   out of reach, O(n²) with a linear scan

mod autonomy_nn;

pub use autonomy_nn::{build_route, AutonomyRouteBuilder, OriginExclusion};
