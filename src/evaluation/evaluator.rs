//! Route length and invariant checks.

use std::collections::HashSet;

use crate::distance::distance;
use crate::models::{Point, Route, Violation, ViolationType};

/// Total length of a closed route: every consecutive edge plus the edge from
/// the last point back to the first.
///
/// An empty or single-point route has length zero. A route that already
/// ends with an explicit copy of its first point gets a zero-length closing
/// edge, so both closed forms measure the same.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::evaluation::route_total_distance;
///
/// let route = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// assert!((route_total_distance(&route) - 20.0).abs() < 1e-10);
/// assert_eq!(route_total_distance(&route[..1]), 0.0);
/// assert_eq!(route_total_distance(&[]), 0.0);
/// ```
pub fn route_total_distance(route: &[Point]) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let legs: f64 = route.windows(2).map(|w| distance(w[0], w[1])).sum();
    legs + distance(last, first)
}

/// Audits routes against the points they were built from and an autonomy
/// budget.
///
/// Checks that every entry is an input point, that no input point is used
/// twice (the explicit closing origin aside), and that every committed point
/// could return to the origin within the budget.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::constructive::build_route;
/// use u_autoroute::evaluation::RouteEvaluator;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let route = build_route(&points, 12.0).unwrap();
///
/// let evaluator = RouteEvaluator::new(&points, 12.0);
/// assert!(evaluator.check(&route).is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    points: &'a [Point],
    autonomy_max: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given input and budget.
    pub fn new(points: &'a [Point], autonomy_max: f64) -> Self {
        Self {
            points,
            autonomy_max,
        }
    }

    /// Checks a built route, returning every violation found.
    pub fn check(&self, route: &Route) -> Vec<Violation> {
        self.check_entries(route.indices(), route.points(), route.is_explicitly_closed())
    }

    /// Checks a route given as parallel index and point sequences.
    ///
    /// `explicitly_closed` marks a final entry that repeats the origin as the
    /// return leg rather than a visit.
    pub fn check_entries(
        &self,
        indices: &[usize],
        points: &[Point],
        explicitly_closed: bool,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        if indices.len() != points.len() {
            violations.push(Violation::new(ViolationType::LengthMismatch {
                indices: indices.len(),
                points: points.len(),
            }));
        }
        let Some(origin) = self.points.first().copied() else {
            return violations;
        };
        let closing = if explicitly_closed {
            indices.len().checked_sub(1)
        } else {
            None
        };

        let mut seen = HashSet::new();
        let mut spent = 0.0;
        let mut prev = origin;

        for (position, (&index, &point)) in indices.iter().zip(points).enumerate() {
            let Some(&expected) = self.points.get(index) else {
                violations.push(Violation::new(ViolationType::UnknownIndex { position, index }));
                continue;
            };
            if expected != point {
                violations.push(Violation::new(ViolationType::PointMismatch { position, index }));
            }

            if Some(position) == closing {
                if index != 0 {
                    violations.push(Violation::new(ViolationType::MisplacedOrigin { position }));
                }
                break;
            }
            if index == 0 && position != 0 {
                violations.push(Violation::new(ViolationType::MisplacedOrigin { position }));
                continue;
            }
            if !seen.insert(index) {
                violations.push(Violation::new(ViolationType::RepeatedIndex { position, index }));
                continue;
            }

            spent += distance(prev, point);
            prev = point;
            let return_distance = distance(point, origin);
            if spent + return_distance > self.autonomy_max && position > 0 {
                violations.push(Violation::new(ViolationType::BudgetExceeded {
                    position,
                    spent,
                    return_distance,
                    autonomy_max: self.autonomy_max,
                }));
            }
        }

        violations
    }
}
