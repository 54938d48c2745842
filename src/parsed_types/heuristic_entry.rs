//! Contains definitions for a line of a heuristic file via the
//! [`HeuristicEntry`] type.

use super::StateName;

#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicEntry {
    state: StateName,
    value: f64,
}

impl HeuristicEntry {
    pub const fn new(state: StateName, value: f64) -> Self {
        Self { state, value }
    }

    pub const fn state(&self) -> StateName {
        self.state
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}
