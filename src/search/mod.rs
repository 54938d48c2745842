mod frontiers;
mod heuristics;
mod search_node;
mod search_report;
mod search_space;
pub mod search_engines;
mod state_path;
mod state_space;
mod transition;
mod validate;
mod verbosity;

use ordered_float::OrderedFloat;

/// Accumulated path cost, totally ordered so it can key the frontiers.
pub type Cost = OrderedFloat<f64>;

pub use frontiers::{BestScoreFrontier, FifoFrontier, Frontier, MinCostFrontier};
pub use heuristics::{Heuristic, HeuristicTable, HeuristicValue, ZeroHeuristic};
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult, SearchStatistics, Solution};
pub use search_report::SearchReport;
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use state_path::StatePath;
pub use state_space::StateSpace;
pub use transition::Transition;
pub use validate::validate;
pub use verbosity::Verbosity;
