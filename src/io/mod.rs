//! Point and route I/O.
//!
//! - [`read_points`] / [`load_points`] — tab-separated point files
//! - [`write_route`] / [`save_route`] — route files in the same format
//! - [`render_svg`] — static drawing of a route
//! - [`generate_points`] — seeded random instances

mod generate;
mod points;
mod render;

pub use generate::generate_points;
pub use points::{load_points, read_points, save_route, write_route};
pub use render::{render_svg, SvgOptions};
