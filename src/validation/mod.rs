//! Checks a heuristic table against a state space: whether it never
//! overestimates the true cost to a goal ([`check_optimism`]) and whether it
//! satisfies the triangle inequality on every edge ([`check_consistency`]).

mod condition;
mod consistency;
mod optimism;
mod validation_report;

pub use condition::Condition;
pub use consistency::check_consistency;
pub use optimism::check_optimism;
pub use validation_report::{HeuristicProperty, ValidationReport};
