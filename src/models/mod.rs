//! Domain model types for budget-limited routing.
//!
//! Provides the core abstractions: points in the plane, routes as ordered
//! sequences of visited points anchored at an origin, and the violations an
//! audit can report against a route.

mod point;
mod route;
mod violation;

pub use point::Point;
pub use route::{Route, RouteEnd};
pub use violation::{Violation, ViolationType};
