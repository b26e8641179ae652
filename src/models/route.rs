//! Route types.

use super::Point;

/// How route construction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEnd {
    /// Every candidate point was visited. The closing edge back to the
    /// origin is implicit and not stored as an entry.
    Completed,
    /// The next nearest point could not be reached and returned from within
    /// the budget. The origin is stored again as the final entry.
    BudgetExhausted,
    /// The budget was zero, negative or NaN; only the origin is stored.
    NoBudget,
}

/// An ordered sequence of points visited by a single vehicle, starting at
/// the origin.
///
/// Each entry carries the index of the point in the input slice, so a route
/// can be audited against the points it was built from. The first entry is
/// always the origin (input index 0).
///
/// # Examples
///
/// ```
/// use u_autoroute::models::{Point, Route, RouteEnd};
///
/// let mut route = Route::new(Point::new(0.0, 0.0));
/// route.push_stop(1, Point::new(3.0, 4.0), 5.0);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.spent(), 5.0);
/// assert_eq!(route.end(), RouteEnd::Completed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Point>,
    indices: Vec<usize>,
    spent: f64,
    end: RouteEnd,
    unvisited: Vec<usize>,
}

impl Route {
    /// Creates a route holding only the origin.
    pub fn new(origin: Point) -> Self {
        Self {
            points: vec![origin],
            indices: vec![0],
            spent: 0.0,
            end: RouteEnd::Completed,
            unvisited: Vec::new(),
        }
    }

    /// Appends a visited point reached by a hop of length `hop`.
    pub fn push_stop(&mut self, index: usize, point: Point, hop: f64) {
        self.points.push(point);
        self.indices.push(index);
        self.spent += hop;
    }

    /// Appends the origin as an explicit closing entry and marks the route
    /// as cut short by the budget.
    pub fn close_at_origin(&mut self, unvisited: Vec<usize>) {
        self.points.push(self.origin());
        self.indices.push(0);
        self.end = RouteEnd::BudgetExhausted;
        self.unvisited = unvisited;
    }

    /// Records how construction ended and which input indices were left out.
    pub fn set_end(&mut self, end: RouteEnd, unvisited: Vec<usize>) {
        self.end = end;
        self.unvisited = unvisited;
    }

    /// The origin (first entry).
    pub fn origin(&self) -> Point {
        self.points[0]
    }

    /// Returns the ordered points of this route.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the input index of each entry, in route order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of entries, including an explicit closing origin.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a route holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct input points on the route, origin included.
    pub fn num_visited(&self) -> usize {
        match self.end {
            RouteEnd::BudgetExhausted => self.points.len() - 1,
            RouteEnd::Completed | RouteEnd::NoBudget => self.points.len(),
        }
    }

    /// Input indices that were never visited.
    pub fn unvisited(&self) -> &[usize] {
        &self.unvisited
    }

    /// Distance spent on committed hops, excluding any return to the origin.
    pub fn spent(&self) -> f64 {
        self.spent
    }

    /// How construction ended.
    pub fn end(&self) -> RouteEnd {
        self.end
    }

    /// Returns `true` if the origin is stored again as the final entry.
    pub fn is_explicitly_closed(&self) -> bool {
        self.end == RouteEnd::BudgetExhausted
    }
}
