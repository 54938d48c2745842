use crate::parsed_types::StateName;
use crate::search::{NodeId, SearchNode};
use std::fmt::Debug;

/// The open list of a search: the nodes generated but not yet expanded,
/// ordered by some policy.
pub trait Frontier: Debug {
    /// Add a node to the frontier.
    fn insert(&mut self, node: &SearchNode);

    /// Remove and return the node that should be expanded next.
    fn pop(&mut self) -> Option<NodeId>;

    /// The pending node for `state`. Only frontiers that keep at most one
    /// pending node per state can answer this; the others return `None`.
    fn find(&self, _state: StateName) -> Option<NodeId> {
        None
    }

    /// Drop a pending node without expanding it. Returns whether the node
    /// was pending.
    fn remove(&mut self, _node_id: NodeId) -> bool {
        false
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
