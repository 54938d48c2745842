use crate::parsed_types::StateName;
use crate::search::{Frontier, HeuristicValue, NodeId, SearchNode};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Pops the node with the lowest f-value (g + h), breaking ties by state
/// name. Keeps at most one pending node per state, which can be looked up by
/// name and replaced when a cheaper path to the state turns up.
#[derive(Debug)]
pub struct BestScoreFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, StateName)>>,
    pending: HashMap<StateName, NodeId>,
}

impl BestScoreFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            pending: HashMap::new(),
        }
    }
}

impl Default for BestScoreFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for BestScoreFrontier {
    /// Inserting a node for a state that is already pending replaces the
    /// pending node.
    fn insert(&mut self, node: &SearchNode) {
        if let Some(previous) = self.pending.insert(node.get_state(), node.get_node_id()) {
            self.queue.remove(&previous);
        }
        self.queue
            .push(node.get_node_id(), Reverse((node.get_f(), node.get_state())));
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (node_id, Reverse((_, state))) = self.queue.pop()?;
        self.pending.remove(&state);
        Some(node_id)
    }

    fn find(&self, state: StateName) -> Option<NodeId> {
        self.pending.get(&state).copied()
    }

    fn remove(&mut self, node_id: NodeId) -> bool {
        match self.queue.remove(&node_id) {
            Some((_, Reverse((_, state)))) => {
                self.pending.remove(&state);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
