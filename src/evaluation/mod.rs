//! Route evaluation: cycle length, invariant audits, and run reports.

mod evaluator;
mod report;

pub use evaluator::{route_total_distance, RouteEvaluator};
pub use report::{timed, RouteReport};
