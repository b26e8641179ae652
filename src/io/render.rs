//! SVG rendering of a route.
//!
//! Draws the closed route as a single path (closing edge included), every
//! stop as a dot, and the origin as a larger dot in a second color. The y
//! axis is flipped so the picture matches a Cartesian plot of the input.
//!
//! Pure function with no I/O: it returns a `String`.

use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Title};
use svg::Document;

use crate::models::Point;

/// Drawing options for [`render_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Rendered width in pixels; height follows the aspect ratio.
    pub width: f64,
    /// Blank border around the points, in input units.
    pub margin: f64,
    /// Radius of a stop marker, in input units.
    pub point_radius: f64,
    /// Optional `<title>` element.
    pub title: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            margin: 10.0,
            point_radius: 2.0,
            title: None,
        }
    }
}

/// Renders a route as an SVG document.
///
/// # Examples
///
/// ```
/// use u_autoroute::io::{render_svg, SvgOptions};
/// use u_autoroute::models::Point;
///
/// let route = [Point::new(0.0, 0.0), Point::new(30.0, 40.0)];
/// let svg = render_svg(&route, &SvgOptions::default());
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("<path"));
/// ```
pub fn render_svg(route: &[Point], options: &SvgOptions) -> String {
    let (min_x, min_y, max_x, max_y) = bounding_box(route);
    let w = (max_x - min_x).max(1.0) + 2.0 * options.margin;
    let h = (max_y - min_y).max(1.0) + 2.0 * options.margin;
    let height = options.width * h / w;

    // Flip y so larger coordinates are drawn higher up.
    let tx = |p: &Point| (p.x() - min_x, max_y - p.y());

    let mut doc = Document::new()
        .set("width", options.width)
        .set("height", height)
        .set(
            "viewBox",
            format!("{} {} {w} {h}", -options.margin, -options.margin),
        );

    if let Some(title) = &options.title {
        doc = doc.add(Title::new(title.as_str()));
    }

    if let Some((first, rest)) = route.split_first() {
        if !rest.is_empty() {
            let mut data = Data::new().move_to(tx(first));
            for p in rest {
                data = data.line_to(tx(p));
            }
            let path = Path::new()
                .set("d", data.close())
                .set("fill", "none")
                .set("stroke", "steelblue")
                .set("stroke-width", options.point_radius / 2.0);
            doc = doc.add(path);
        }

        for p in rest.iter().filter(|p| *p != first) {
            let (cx, cy) = tx(p);
            doc = doc.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", options.point_radius)
                    .set("fill", "crimson"),
            );
        }

        let (cx, cy) = tx(first);
        doc = doc.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", options.point_radius * 2.0)
                .set("fill", "darkgreen"),
        );
    }

    doc.to_string()
}

fn bounding_box(points: &[Point]) -> (f64, f64, f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0, 0.0, 0.0);
    }
    points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), p| {
            (
                min_x.min(p.x()),
                min_y.min(p.y()),
                max_x.max(p.x()),
                max_y.max(p.y()),
            )
        },
    )
}
