//! Contains the parsed form of a state space file via the
//! [`StateSpaceDescription`] type.

use super::{StateLine, StateName};

#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceDescription {
    start: StateName,
    goals: Vec<StateName>,
    states: Vec<StateLine>,
}

impl StateSpaceDescription {
    pub const fn new(start: StateName, goals: Vec<StateName>, states: Vec<StateLine>) -> Self {
        Self {
            start,
            goals,
            states,
        }
    }

    pub const fn start(&self) -> StateName {
        self.start
    }

    pub const fn goals(&self) -> &Vec<StateName> {
        &self.goals
    }

    pub const fn states(&self) -> &Vec<StateLine> {
        &self.states
    }
}
