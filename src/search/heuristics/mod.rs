mod heuristic;
mod heuristic_table;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue};
pub use heuristic_table::HeuristicTable;
pub use zero_heuristic::ZeroHeuristic;
