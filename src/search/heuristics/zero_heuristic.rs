use crate::error::SearchError;
use crate::parsed_types::StateName;
use crate::search::{Heuristic, HeuristicValue};

/// Estimates zero everywhere; turns A*-style ordering into plain cost
/// ordering and is what BFS and UCS search with.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: StateName) -> Result<HeuristicValue, SearchError> {
        Ok((0.).into())
    }
}
