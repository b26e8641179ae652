//! Euclidean distance primitives.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// Non-negative, symmetric, and zero for identical points. Uses
/// [`f64::hypot`] so large coordinates do not overflow the intermediate
/// squares.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::distance::distance;
///
/// let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Squared Euclidean distance.
///
/// Monotone in [`distance`], so nearest-point comparisons use it to avoid
/// the square root. Computed as `dx * dx + dy * dy` to match the metric the
/// R-tree index uses, so every search strategy sees the same ties.
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}
