use crate::error::SearchError;
use crate::search::{
    search_engines::{GraphSearch, ReopeningPolicy, SearchEngine},
    Cost, Heuristic, MinCostFrontier, StateSpace, ZeroHeuristic,
};
use crate::validation::{Condition, HeuristicProperty, ValidationReport};
use tracing::{debug, info};

/// Compares `heuristic` against the true cost to the nearest goal for every
/// state that has its own line in the state space, in alphabetical order.
/// The true cost comes from a uniform-cost search seeded at each state; a
/// state that cannot reach any goal has an infinite true cost, so any finite
/// estimate for it passes.
pub fn check_optimism(
    state_space: &StateSpace,
    heuristic: &dyn Heuristic,
    heuristic_label: &str,
) -> Result<ValidationReport, SearchError> {
    let mut engine = GraphSearch::<MinCostFrontier>::new(ReopeningPolicy::Never);
    let zero = ZeroHeuristic::new();
    let mut conditions = Vec::with_capacity(state_space.num_states());

    for state in state_space.states() {
        let h = heuristic.evaluate(state)?;
        let (result, _) = engine.search(state_space, state, &zero)?;
        let h_star = result
            .solution()
            .map_or(Cost::from(f64::INFINITY), |solution| solution.cost());
        debug!(state = %state, h = h.into_inner(), h_star = h_star.into_inner());
        conditions.push(Condition::Optimistic { state, h, h_star });
    }

    let report = ValidationReport::new(
        HeuristicProperty::Optimistic,
        heuristic_label.to_string(),
        conditions,
    );
    info!(
        states = report.conditions().len(),
        failed = report.num_failed(),
        "checked optimism"
    );
    Ok(report)
}
