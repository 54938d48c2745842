//! Contains definitions for a weighted outgoing edge via the [`Edge`] type.

use super::StateName;

/// An edge `<target>,<cost>` as written on a state line.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    target: StateName,
    cost: f64,
}

impl Edge {
    pub const fn new(target: StateName, cost: f64) -> Self {
        Self { target, cost }
    }

    pub const fn target(&self) -> StateName {
        self.target
    }

    pub const fn cost(&self) -> f64 {
        self.cost
    }
}
