use crate::error::SearchError;
use crate::parsed_types::StateName;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the cost of reaching a goal from the given state.
    fn evaluate(&self, state: StateName) -> Result<HeuristicValue, SearchError>;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially and stops at the first failure.
    fn evaluate_batch(&self, states: &[StateName]) -> Result<Vec<HeuristicValue>, SearchError> {
        states.iter().map(|&state| self.evaluate(state)).collect()
    }
}
