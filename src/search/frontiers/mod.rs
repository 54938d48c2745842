mod best_score_frontier;
mod fifo_frontier;
mod frontier;
mod min_cost_frontier;

pub use best_score_frontier::BestScoreFrontier;
pub use fifo_frontier::FifoFrontier;
pub use frontier::Frontier;
pub use min_cost_frontier::MinCostFrontier;
