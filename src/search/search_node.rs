use crate::parsed_types::StateName;
use crate::search::{Cost, HeuristicValue};

/// Index of a [`SearchNode`] in its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub const fn id(&self) -> usize {
        self.0
    }
}

/// Parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
    /// Node was dropped from the open or closed list in favour of a newer
    /// node for the same state. It stays in the search space as long as
    /// other nodes name it as their parent.
    Superseded,
}

/// A [`SearchNode`] is one instantiation of a state during a search. Several
/// nodes may share a state name; they only differ in how the state was
/// reached.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node
    node_id: NodeId,
    /// The state this node instantiates
    state: StateName,
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the cost of the path that produced it.
    g: Cost,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Zero for searches that do not use a heuristic.
    h: HeuristicValue,
    /// Node this one was generated from
    parent_id: NodeId,
}

impl SearchNode {
    pub(crate) fn new(
        node_id: NodeId,
        state: StateName,
        g: Cost,
        h: HeuristicValue,
        parent_id: NodeId,
    ) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::Open,
            g,
            h,
            parent_id,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn supersede(&mut self) {
        self.status = SearchNodeStatus::Superseded;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> StateName {
        self.state
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    /// Two nodes instantiate the same state iff their names match, whatever
    /// their costs or parents.
    pub fn is_same_state(&self, other: &SearchNode) -> bool {
        self.state == other.state
    }
}
