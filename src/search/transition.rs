use crate::parsed_types::StateName;
use crate::search::Cost;

/// An outgoing edge of a state in the [`crate::search::StateSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: StateName,
    pub cost: Cost,
}

impl Transition {
    pub fn new(target: StateName, cost: Cost) -> Self {
        Self { target, cost }
    }
}
