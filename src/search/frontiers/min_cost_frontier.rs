use crate::parsed_types::StateName;
use crate::search::{Cost, Frontier, NodeId, SearchNode};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Pops the node with the lowest g-value, breaking ties by state name and
/// then by insertion order. The same state may be pending several times;
/// the cheapest instance always comes out first.
#[derive(Debug, Default)]
pub struct MinCostFrontier {
    heap: BinaryHeap<Reverse<(Cost, StateName, NodeId)>>,
}

impl MinCostFrontier {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl Frontier for MinCostFrontier {
    fn insert(&mut self, node: &SearchNode) {
        self.heap.push(Reverse((
            node.get_g(),
            node.get_state(),
            node.get_node_id(),
        )));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node_id))| node_id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSpace;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_cheapest_then_alphabetical() {
        let mut search_space = SearchSpace::new();
        let mut frontier = MinCostFrontier::new();
        // Heuristic values must not influence the order.
        let big = OrderedFloat(100.);
        let root = search_space.insert_root_node("S".into(), big);
        let c5 = search_space.insert_node("C".into(), OrderedFloat(5.), OrderedFloat(0.), root);
        let b3 = search_space.insert_node("B".into(), OrderedFloat(3.), big, root);
        let a3 = search_space.insert_node("A".into(), OrderedFloat(3.), big, root);
        let c3 = search_space.insert_node("C".into(), OrderedFloat(3.), big, root);
        for node_id in [c5, b3, a3, c3] {
            frontier.insert(search_space.get_node(node_id));
        }

        assert_eq!(frontier.pop(), Some(a3));
        assert_eq!(frontier.pop(), Some(b3));
        assert_eq!(frontier.pop(), Some(c3));
        assert_eq!(frontier.pop(), Some(c5));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn keeps_duplicates() {
        let mut search_space = SearchSpace::new();
        let mut frontier = MinCostFrontier::new();
        let zero = OrderedFloat(0.);
        let root = search_space.insert_root_node("S".into(), zero);
        let first = search_space.insert_node("A".into(), OrderedFloat(2.), zero, root);
        let second = search_space.insert_node("A".into(), OrderedFloat(2.), zero, root);
        frontier.insert(search_space.get_node(first));
        frontier.insert(search_space.get_node(second));

        assert_eq!(frontier.len(), 2);
        assert!(!frontier.remove(first));
        assert_eq!(frontier.pop(), Some(first));
        assert_eq!(frontier.pop(), Some(second));
    }
}
