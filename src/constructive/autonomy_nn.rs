//! Budget-limited nearest-neighbor route construction.
//!
//! Builds a single route greedily: starting from the origin, always move to
//! the nearest unvisited point, provided the vehicle could still return to
//! the origin afterwards within its autonomy. The first time that check
//! fails, the route returns to the origin and construction stops.
//!
//! # Complexity
//!
//! O(n²) with [`SearchStrategy::Linear`] or [`SearchStrategy::Parallel`];
//! roughly O(n log n) with [`SearchStrategy::RTree`] on well-spread points.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::distance::{
    distance, LinearScan, NearestSearch, ParallelScan, RTreeSearch, SearchStrategy,
};
use crate::error::RouteError;
use crate::models::{Point, Route, RouteEnd};

/// Which points count as "the origin" when seeding the remaining set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginExclusion {
    /// Only input index 0 is excluded. Points with the same coordinates as
    /// the origin are visited like any other point.
    #[default]
    ByIndex,
    /// Every point value-equal to the origin is excluded and reported as
    /// unvisited.
    ByValue,
}

/// Constructs a budget-limited route with the default builder settings.
///
/// Uses a linear scan for the nearest-point search and excludes only
/// `points[0]` from the candidates. See [`AutonomyRouteBuilder`] for the
/// other options.
///
/// # Errors
///
/// Returns [`RouteError::EmptyInput`] for an empty slice and
/// [`RouteError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::{Point, RouteEnd};
/// use u_autoroute::constructive::build_route;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
///
/// let route = build_route(&points, 100.0).unwrap();
/// assert_eq!(route.points(), &points[..]);
/// assert_eq!(route.end(), RouteEnd::Completed);
///
/// let short = build_route(&points, 12.0).unwrap();
/// assert_eq!(short.points(), &[points[0], points[1], points[0]]);
/// assert_eq!(short.end(), RouteEnd::BudgetExhausted);
/// ```
pub fn build_route(points: &[Point], autonomy_max: f64) -> Result<Route, RouteError> {
    AutonomyRouteBuilder::new(autonomy_max).build(points)
}

/// Configurable nearest-neighbor route builder for a vehicle with bounded
/// autonomy.
///
/// # Examples
///
/// ```
/// use u_autoroute::models::Point;
/// use u_autoroute::constructive::AutonomyRouteBuilder;
/// use u_autoroute::distance::SearchStrategy;
///
/// let points: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i), 0.0)).collect();
/// let route = AutonomyRouteBuilder::new(100.0)
///     .with_strategy(SearchStrategy::RTree)
///     .build(&points)
///     .unwrap();
/// assert_eq!(route.num_visited(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AutonomyRouteBuilder {
    autonomy_max: f64,
    strategy: SearchStrategy,
    threads: usize,
    origin_exclusion: OriginExclusion,
}

impl AutonomyRouteBuilder {
    /// Creates a builder with the given autonomy budget.
    ///
    /// Defaults: linear search, automatic thread count for the parallel
    /// strategy, origin excluded by index.
    pub fn new(autonomy_max: f64) -> Self {
        Self {
            autonomy_max,
            strategy: SearchStrategy::Linear,
            threads: 0,
            origin_exclusion: OriginExclusion::ByIndex,
        }
    }

    /// Creates a builder from a loaded configuration.
    pub fn from_config(config: &RouteConfig) -> Self {
        Self::new(config.autonomy_max)
            .with_strategy(config.strategy)
            .with_threads(config.threads)
            .with_origin_exclusion(config.origin_exclusion)
    }

    /// Sets the nearest-point search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the worker count for [`SearchStrategy::Parallel`] (0 = rayon's
    /// global pool).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets how the origin is excluded from the candidates.
    pub fn with_origin_exclusion(mut self, exclusion: OriginExclusion) -> Self {
        self.origin_exclusion = exclusion;
        self
    }

    /// Autonomy budget.
    pub fn autonomy_max(&self) -> f64 {
        self.autonomy_max
    }

    /// Nearest-point search strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Builds the route over `points`, with `points[0]` as the origin.
    ///
    /// A budget that is zero, negative or NaN yields the origin-only route
    /// with [`RouteEnd::NoBudget`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyInput`] for an empty slice and
    /// [`RouteError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn build(&self, points: &[Point]) -> Result<Route, RouteError> {
        let origin = *points.first().ok_or(RouteError::EmptyInput)?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::NonFiniteCoordinate { index });
        }

        let (candidates, excluded): (Vec<usize>, Vec<usize>) = (1..points.len())
            .partition(|&i| match self.origin_exclusion {
                OriginExclusion::ByIndex => true,
                OriginExclusion::ByValue => points[i] != origin,
            });
        if !excluded.is_empty() {
            warn!(
                "excluding {} point(s) with the origin's coordinates",
                excluded.len()
            );
        }

        debug!(
            "building route: {} points, autonomy {}, {:?} search",
            points.len(),
            self.autonomy_max,
            self.strategy
        );

        let mut route = Route::new(origin);
        if candidates.is_empty() {
            route.set_end(RouteEnd::Completed, excluded);
            return Ok(route);
        }
        // Also catches NaN.
        if !(self.autonomy_max > 0.0) {
            warn!(
                "autonomy {} is not positive; route holds only the origin",
                self.autonomy_max
            );
            route.set_end(RouteEnd::NoBudget, (1..points.len()).collect());
            return Ok(route);
        }

        match self.strategy {
            SearchStrategy::Linear => {
                self.extend(points, LinearScan::new(points, candidates), excluded, &mut route)
            }
            SearchStrategy::Parallel => self.extend(
                points,
                ParallelScan::new(points, candidates, self.threads),
                excluded,
                &mut route,
            ),
            SearchStrategy::RTree => {
                self.extend(points, RTreeSearch::new(points, candidates), excluded, &mut route)
            }
        }

        debug!(
            "route built: {} of {} points visited, {:.3} spent, {:?}",
            route.num_visited(),
            points.len(),
            route.spent(),
            route.end()
        );
        Ok(route)
    }

    /// Runs the greedy loop until the candidates run out or the budget
    /// forces a return.
    fn extend<S: NearestSearch>(
        &self,
        points: &[Point],
        mut remaining: S,
        excluded: Vec<usize>,
        route: &mut Route,
    ) {
        let origin = route.origin();
        let mut current = origin;

        while let Some(next) = remaining.nearest(current) {
            let candidate = points[next];
            let hop = distance(current, candidate);
            let back = distance(candidate, origin);
            let spent = route.spent();

            if spent + hop <= self.autonomy_max && spent + hop + back <= self.autonomy_max {
                remaining.remove(next);
                route.push_stop(next, candidate, hop);
                trace!("visit point {next}: hop {hop:.3}, spent {:.3}", route.spent());
                current = candidate;
            } else {
                debug!(
                    "point {next} out of reach (spent {spent:.3} + hop {hop:.3} + return {back:.3} > {}); returning to origin",
                    self.autonomy_max
                );
                let mut unvisited = remaining.remaining();
                unvisited.extend(excluded);
                unvisited.sort_unstable();
                route.close_at_origin(unvisited);
                return;
            }
        }

        route.set_end(RouteEnd::Completed, excluded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 8.0),
        ]
    }

    fn line_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]
    }

    const STRATEGIES: [SearchStrategy; 3] = [
        SearchStrategy::Linear,
        SearchStrategy::Parallel,
        SearchStrategy::RTree,
    ];

    #[test]
    fn test_visits_all_with_large_budget() {
        let pts = diagonal();
        let route = build_route(&pts, 100.0).expect("valid input");
        assert_eq!(route.points(), &pts[..]);
        assert_eq!(route.indices(), &[0, 1, 2]);
        assert_eq!(route.end(), RouteEnd::Completed);
        assert!(route.unvisited().is_empty());
        assert!((route.spent() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_budget_forces_early_return() {
        let pts = diagonal();
        // (6,8) is reachable (5 + 5 <= 12) but not returnable from (10 + 10 > 12)
        let route = build_route(&pts, 12.0).expect("valid input");
        assert_eq!(route.points(), &[pts[0], pts[1], pts[0]]);
        assert_eq!(route.end(), RouteEnd::BudgetExhausted);
        assert_eq!(route.unvisited(), &[2]);
        assert!((route.spent() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_budget_too_small_for_first_hop() {
        let pts = diagonal();
        // 5 out + 5 back = 10 > 9: nothing is committed
        let route = build_route(&pts, 9.0).expect("valid input");
        assert_eq!(route.points(), &[pts[0], pts[0]]);
        assert_eq!(route.end(), RouteEnd::BudgetExhausted);
        assert_eq!(route.unvisited(), &[1, 2]);
        assert_eq!(route.spent(), 0.0);

        let route = build_route(&pts, 10.0).expect("valid input");
        assert_eq!(route.points(), &[pts[0], pts[1], pts[0]]);
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let pts = diagonal();
        // 0->1->2 spends 10, return from (6,8) is 10: exactly 20
        let route = build_route(&pts, 20.0).expect("valid input");
        assert_eq!(route.end(), RouteEnd::Completed);
        assert_eq!(route.num_visited(), 3);
    }

    #[test]
    fn test_chooses_nearest() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0), // far
            Point::new(1.0, 0.0),  // near
        ];
        let route = build_route(&pts, 100.0).expect("valid input");
        assert_eq!(route.indices(), &[0, 2, 1]);
    }

    #[test]
    fn test_line_in_order() {
        let pts = line_points();
        let route = build_route(&pts, 6.0).expect("valid input");
        assert_eq!(route.indices(), &[0, 1, 2, 3]);
        assert_eq!(route.end(), RouteEnd::Completed);
    }

    #[test]
    fn test_tie_breaks_on_input_order() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, -2.0),
        ];
        for strategy in STRATEGIES {
            let route = AutonomyRouteBuilder::new(100.0)
                .with_strategy(strategy)
                .build(&pts)
                .expect("valid input");
            assert_eq!(route.indices()[1], 1, "{strategy:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(build_route(&[], 10.0), Err(RouteError::EmptyInput)));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert!(matches!(
            build_route(&pts, 10.0),
            Err(RouteError::NonFiniteCoordinate { index: 1 })
        ));
    }

    #[test]
    fn test_single_point() {
        let pts = vec![Point::new(5.0, 5.0)];
        let route = build_route(&pts, 10.0).expect("valid input");
        assert_eq!(route.points(), &pts[..]);
        assert_eq!(route.end(), RouteEnd::Completed);
        // No candidates, so even a zero budget completes
        let route = build_route(&pts, 0.0).expect("valid input");
        assert_eq!(route.end(), RouteEnd::Completed);
    }

    #[test]
    fn test_non_positive_budget() {
        let pts = diagonal();
        for budget in [0.0, -5.0, f64::NAN] {
            let route = build_route(&pts, budget).expect("valid input");
            assert_eq!(route.points(), &[pts[0]]);
            assert_eq!(route.end(), RouteEnd::NoBudget);
            assert_eq!(route.unvisited(), &[1, 2]);
        }
    }

    #[test]
    fn test_origin_duplicate_by_index() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let route = build_route(&pts, 100.0).expect("valid input");
        // The duplicate is at distance 0 from the origin and visited first
        assert_eq!(route.indices(), &[0, 2, 1]);
        assert!(route.unvisited().is_empty());
    }

    #[test]
    fn test_origin_duplicate_by_value() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let route = AutonomyRouteBuilder::new(100.0)
            .with_origin_exclusion(OriginExclusion::ByValue)
            .build(&pts)
            .expect("valid input");
        assert_eq!(route.indices(), &[0, 1]);
        assert_eq!(route.end(), RouteEnd::Completed);
        assert_eq!(route.unvisited(), &[2]);
    }

    #[test]
    fn test_by_value_all_duplicates() {
        let pts = vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0)];
        let route = AutonomyRouteBuilder::new(0.0)
            .with_origin_exclusion(OriginExclusion::ByValue)
            .build(&pts)
            .expect("valid input");
        assert_eq!(route.points(), &[pts[0]]);
        assert_eq!(route.end(), RouteEnd::Completed);
        assert_eq!(route.unvisited(), &[1]);
    }

    #[test]
    fn test_strategies_agree() {
        let pts: Vec<Point> = (0..300_u32)
            .map(|i| Point::new(f64::from((i * 53) % 97), f64::from((i * 29) % 61)))
            .collect();
        for budget in [50.0, 400.0, 1e6] {
            let reference = build_route(&pts, budget).expect("valid input");
            for strategy in STRATEGIES {
                let route = AutonomyRouteBuilder::new(budget)
                    .with_strategy(strategy)
                    .with_threads(3)
                    .build(&pts)
                    .expect("valid input");
                assert_eq!(route, reference, "{strategy:?} at budget {budget}");
            }
        }
    }

    #[test]
    fn test_from_config() {
        let config = RouteConfig {
            autonomy_max: 42.0,
            strategy: SearchStrategy::RTree,
            threads: 2,
            origin_exclusion: OriginExclusion::ByValue,
        };
        let builder = AutonomyRouteBuilder::from_config(&config);
        assert_eq!(builder.autonomy_max(), 42.0);
        assert_eq!(builder.strategy(), SearchStrategy::RTree);
        assert_eq!(
            builder,
            AutonomyRouteBuilder::new(42.0)
                .with_strategy(SearchStrategy::RTree)
                .with_threads(2)
                .with_origin_exclusion(OriginExclusion::ByValue)
        );
    }
}
