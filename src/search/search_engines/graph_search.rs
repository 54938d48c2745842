//! The search loop shared by BFS, UCS and A*. The three algorithms only
//! differ in how their frontier orders nodes and in the [`ReopeningPolicy`]
//! they apply to generated successors.

use crate::error::SearchError;
use crate::parsed_types::StateName;
use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchStatistics, Solution},
    Frontier, Heuristic, NodeId, SearchSpace, StateSpace,
};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{debug, info, trace};

/// What to do with a successor whose state has already been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReopeningPolicy {
    /// Drop the successor if its state has been expanded, otherwise insert
    /// it. Pending nodes are never compared, so the frontier may hold
    /// several nodes for one state, and each of them is expanded when
    /// popped.
    Never,
    /// Compare against the closed or pending node for the same state and
    /// drop the successor only if that node is strictly cheaper. Otherwise
    /// the old node is dropped and the successor inserted, which moves a
    /// closed state back to the frontier.
    OnCheaperPath,
}

/// Generic graph search over a [`StateSpace`]. A fresh frontier of type `F`
/// is created for every call to [`SearchEngine::search`].
#[derive(Debug)]
pub struct GraphSearch<F: Frontier + Default> {
    reopening: ReopeningPolicy,
    _frontier: PhantomData<F>,
}

impl<F: Frontier + Default> GraphSearch<F> {
    pub fn new(reopening: ReopeningPolicy) -> Self {
        Self {
            reopening,
            _frontier: PhantomData,
        }
    }
}

impl<F: Frontier + Default> SearchEngine for GraphSearch<F> {
    fn search(
        &mut self,
        state_space: &StateSpace,
        start: StateName,
        heuristic: &dyn Heuristic,
    ) -> Result<(SearchResult, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new();
        let mut frontier = F::default();
        // Latest expanded node of every closed state
        let mut closed: HashMap<StateName, NodeId> = HashMap::new();

        let root_id = search_space.insert_root_node(start, heuristic.evaluate(start)?);
        frontier.insert(search_space.get_node(root_id));
        statistics.increment_generated_nodes(1);

        while let Some(node_id) = frontier.pop() {
            let node = search_space.get_node_mut(node_id);
            node.close();
            let state = node.get_state();
            let g_value = node.get_g();
            let h_value = node.get_h();
            let f_value = node.get_f();
            closed.insert(state, node_id);

            if state_space.is_goal(state) {
                info!(goal = %state, cost = g_value.into_inner(), "solution found");
                let solution = Solution::new(search_space.extract_path(node_id, start), g_value);
                statistics.finalise_search();
                return Ok((SearchResult::Success(solution), statistics));
            }

            statistics.increment_expanded_nodes();
            statistics.register_expanded_f(f_value);
            debug!(
                state = %state,
                g = g_value.into_inner(),
                h = h_value.into_inner(),
                "expanding"
            );

            let transitions = state_space.successors(state);
            let targets: Vec<StateName> = transitions.iter().map(|t| t.target).collect();
            let h_values = heuristic.evaluate_batch(&targets)?;

            for (transition, h_value) in transitions.iter().zip(h_values) {
                let target = transition.target;
                let child_g = g_value + transition.cost;

                let admitted = match self.reopening {
                    ReopeningPolicy::Never => !closed.contains_key(&target),
                    ReopeningPolicy::OnCheaperPath => {
                        if let Some(&closed_id) = closed.get(&target) {
                            if search_space.get_node(closed_id).get_g() < child_g {
                                false
                            } else {
                                trace!(state = %target, g = child_g.into_inner(), "reopening");
                                closed.remove(&target);
                                search_space.get_node_mut(closed_id).supersede();
                                statistics.increment_reopened_nodes();
                                true
                            }
                        } else if let Some(open_id) = frontier.find(target) {
                            if search_space.get_node(open_id).get_g() < child_g {
                                false
                            } else {
                                trace!(state = %target, g = child_g.into_inner(), "replacing pending node");
                                frontier.remove(open_id);
                                search_space.get_node_mut(open_id).supersede();
                                statistics.increment_replaced_nodes();
                                true
                            }
                        } else {
                            true
                        }
                    }
                };

                if !admitted {
                    statistics.increment_discarded_nodes();
                    continue;
                }
                let child_id = search_space.insert_node(target, child_g, h_value, node_id);
                frontier.insert(search_space.get_node(child_id));
                statistics.increment_generated_nodes(1);
            }
        }

        info!(start = %start, "frontier exhausted without reaching a goal");
        statistics.finalise_search();
        Ok((SearchResult::Unsolvable, statistics))
    }
}
