//! Violation types reported by route audits.

/// A type of invariant violation found in a route.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// The index and point sequences describing the route differ in length.
    LengthMismatch {
        /// Number of indices given.
        indices: usize,
        /// Number of points given.
        points: usize,
    },
    /// An entry refers to an index outside the input points.
    UnknownIndex {
        /// Position of the entry in the route.
        position: usize,
        /// Offending input index.
        index: usize,
    },
    /// An entry's coordinates differ from the input point at its index.
    PointMismatch {
        /// Position of the entry in the route.
        position: usize,
        /// Input index the entry claims to be.
        index: usize,
    },
    /// An input point appears more than once.
    RepeatedIndex {
        /// Position of the second occurrence.
        position: usize,
        /// Repeated input index.
        index: usize,
    },
    /// The origin appears somewhere other than the first entry or the
    /// explicit closing entry.
    MisplacedOrigin {
        /// Position of the stray origin entry.
        position: usize,
    },
    /// Travelling up to this entry and returning to the origin exceeds the
    /// autonomy budget.
    BudgetExceeded {
        /// Position of the entry in the route.
        position: usize,
        /// Distance spent reaching this entry.
        spent: f64,
        /// Distance from this entry back to the origin.
        return_distance: f64,
        /// Autonomy budget.
        autonomy_max: f64,
    },
}

/// An invariant violation in a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
