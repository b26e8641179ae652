//! # u-autoroute
//!
//! Budget-limited routing: builds a closed tour over 2D points for a vehicle
//! that must be back at its starting point before its autonomy runs out.
//! The tour is grown greedily by nearest neighbor and returns to the origin
//! as soon as the next point could not be reached and returned from.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, Violation)
//! - [`distance`] — Euclidean distance and nearest-point search structures
//! - [`constructive`] — Budget-limited nearest-neighbor route builder
//! - [`evaluation`] — Route length, invariant audits, timing and reports
//! - [`io`] — Point/route files, SVG rendering, random instances
//! - [`config`] — Serializable run settings
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_autoroute::{build_route, route_total_distance};
//! use u_autoroute::models::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(3.0, 4.0),
//!     Point::new(6.0, 8.0),
//! ];
//! let route = build_route(&points, 100.0).unwrap();
//! assert_eq!(route.points(), &points[..]);
//! assert!((route_total_distance(route.points()) - 20.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;

pub use constructive::build_route;
pub use distance::distance;
pub use evaluation::route_total_distance;
