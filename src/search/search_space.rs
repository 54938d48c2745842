use crate::parsed_types::StateName;
use crate::search::{Cost, HeuristicValue, NodeId, SearchNode, StatePath, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] is the arena holding every node created during one
/// search. Nodes are never removed, so parent links stay valid for the whole
/// search no matter what the open and closed lists do with them.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    pub fn insert_root_node(&mut self, state: StateName, h: HeuristicValue) -> NodeId {
        self.insert_node(state, Cost::from(0.), h, NO_NODE)
    }

    pub fn insert_node(
        &mut self,
        state: StateName,
        g: Cost,
        h: HeuristicValue,
        parent_id: NodeId,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new(node_id, state, g, h, parent_id));
        node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    /// Walks parent links from `goal_id` back to the first node whose state
    /// is `start` and returns the visited states in start-to-goal order.
    pub fn extract_path(&self, goal_id: NodeId, start: StateName) -> StatePath {
        let mut states = vec![];
        let mut current_node = self.get_node(goal_id);
        loop {
            states.push(current_node.get_state());
            if current_node.get_state() == start || current_node.get_parent_id() == NO_NODE {
                break;
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        states.reverse();
        StatePath::new(states)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNodeStatus;
    use ordered_float::OrderedFloat;

    #[test]
    fn extract_path_follows_parents() {
        let mut search_space = SearchSpace::new();
        let zero = OrderedFloat(0.);
        let a = search_space.insert_root_node("A".into(), zero);
        let b = search_space.insert_node("B".into(), OrderedFloat(1.), zero, a);
        let _c_via_a = search_space.insert_node("C".into(), OrderedFloat(4.), zero, a);
        let c_via_b = search_space.insert_node("C".into(), OrderedFloat(2.), zero, b);

        let path = search_space.extract_path(c_via_b, "A".into());
        assert_eq!(path.to_string(), "A => B => C");
        assert_eq!(search_space.len(), 4);
    }

    #[test]
    fn extract_path_of_root_is_single_state() {
        let mut search_space = SearchSpace::new();
        let root = search_space.insert_root_node("A".into(), OrderedFloat(3.));
        let path = search_space.extract_path(root, "A".into());
        assert_eq!(path.len(), 1);
        assert_eq!(search_space.get_node(root).get_f(), OrderedFloat(3.));
    }

    #[test]
    fn extract_path_stops_at_first_start_state() {
        let mut search_space = SearchSpace::new();
        let zero = OrderedFloat(0.);
        let a = search_space.insert_root_node("A".into(), zero);
        let b = search_space.insert_node("B".into(), OrderedFloat(1.), zero, a);
        let a_again = search_space.insert_node("A".into(), OrderedFloat(2.), zero, b);
        let c = search_space.insert_node("C".into(), OrderedFloat(3.), zero, a_again);

        let path = search_space.extract_path(c, "A".into());
        assert_eq!(path.to_string(), "A => C");
    }

    #[test]
    fn node_status_transitions() {
        let mut search_space = SearchSpace::new();
        let zero = OrderedFloat(0.);
        let root = search_space.insert_root_node("A".into(), zero);
        let other = search_space.insert_node("A".into(), OrderedFloat(1.), zero, root);
        assert!(search_space
            .get_node(root)
            .is_same_state(search_space.get_node(other)));

        let node = search_space.get_node_mut(root);
        assert_eq!(node.get_status(), SearchNodeStatus::Open);
        node.close();
        assert_eq!(node.get_status(), SearchNodeStatus::Closed);
        node.supersede();
        assert_eq!(node.get_status(), SearchNodeStatus::Superseded);
        assert_eq!(node.get_node_id(), root);
    }
}
