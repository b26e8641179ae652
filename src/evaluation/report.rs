//! Run timing and summary reporting.

use std::fmt;
use std::time::{Duration, Instant};

use super::evaluator::route_total_distance;
use crate::models::{Route, RouteEnd};

/// Runs `f` and returns its result together with the wall-clock time it
/// took.
///
/// # Examples
///
/// ```
/// use u_autoroute::evaluation::timed;
///
/// let (sum, elapsed) = timed(|| (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Summary of one route construction run.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    /// Entries in the route, an explicit closing origin included.
    pub entries: usize,
    /// Distinct input points on the route, origin included.
    pub visited: usize,
    /// Input points left off the route.
    pub unvisited: usize,
    /// Length of the closed route.
    pub total_distance: f64,
    /// How construction ended.
    pub end: RouteEnd,
    /// Construction time.
    pub elapsed: Duration,
}

impl RouteReport {
    /// Summarizes a route built in `elapsed`.
    pub fn new(route: &Route, elapsed: Duration) -> Self {
        Self {
            entries: route.len(),
            visited: route.num_visited(),
            unvisited: route.unvisited().len(),
            total_distance: route_total_distance(route.points()),
            end: route.end(),
            elapsed,
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.end {
            RouteEnd::Completed => "all points visited",
            RouteEnd::BudgetExhausted => "returned early on budget",
            RouteEnd::NoBudget => "no budget",
        };
        writeln!(f, "elapsed: {:.6} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "route entries: {}", self.entries)?;
        writeln!(f, "points visited: {} ({} unvisited)", self.visited, self.unvisited)?;
        writeln!(f, "autonomy spent: {:.3}", self.total_distance)?;
        write!(f, "outcome: {end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::build_route;
    use crate::models::Point;

    fn diagonal() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 8.0),
        ]
    }

    #[test]
    fn test_timed_returns_result() {
        let (v, elapsed) = timed(|| vec![1, 2, 3]);
        assert_eq!(v, vec![1, 2, 3]);
        assert!(elapsed < Duration::from_secs(60));
    }

    #[test]
    fn test_report_completed() {
        let route = build_route(&diagonal(), 100.0).expect("valid input");
        let report = RouteReport::new(&route, Duration::from_millis(3));
        assert_eq!(report.entries, 3);
        assert_eq!(report.visited, 3);
        assert_eq!(report.unvisited, 0);
        assert!((report.total_distance - 20.0).abs() < 1e-10);
        assert_eq!(report.end, RouteEnd::Completed);
    }

    #[test]
    fn test_report_early_return() {
        let route = build_route(&diagonal(), 12.0).expect("valid input");
        let report = RouteReport::new(&route, Duration::ZERO);
        assert_eq!(report.entries, 3);
        assert_eq!(report.visited, 2);
        assert_eq!(report.unvisited, 1);
        assert!((report.total_distance - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_display() {
        let route = build_route(&diagonal(), 100.0).expect("valid input");
        let text = RouteReport::new(&route, Duration::from_millis(1500)).to_string();
        assert!(text.contains("elapsed: 1.500000 s"));
        assert!(text.contains("route entries: 3"));
        assert!(text.contains("autonomy spent: 20.000"));
        assert!(text.ends_with("outcome: all points visited"));
    }
}
