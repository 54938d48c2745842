use crate::search::{Frontier, NodeId, SearchNode};
use std::collections::VecDeque;

/// First in, first out. Costs and heuristic values are ignored, and the same
/// state may be pending several times.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Frontier for FifoFrontier {
    fn insert(&mut self, node: &SearchNode) {
        self.queue.push_back(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSpace;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_insertion_order() {
        let mut search_space = SearchSpace::new();
        let mut frontier = FifoFrontier::new();
        let zero = OrderedFloat(0.);
        let root = search_space.insert_root_node("S".into(), zero);
        let expensive = search_space.insert_node("Z".into(), OrderedFloat(9.), zero, root);
        let cheap = search_space.insert_node("A".into(), OrderedFloat(1.), zero, root);
        let duplicate = search_space.insert_node("Z".into(), OrderedFloat(2.), zero, root);
        for node_id in [expensive, cheap, duplicate] {
            frontier.insert(search_space.get_node(node_id));
        }

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.find("Z".into()), None);
        assert_eq!(frontier.pop(), Some(expensive));
        assert_eq!(frontier.pop(), Some(cheap));
        assert_eq!(frontier.pop(), Some(duplicate));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }
}
