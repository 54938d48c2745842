//! Contains definitions for a single state line via the [`StateLine`] type.

use super::{Edge, StateName};

/// A line `<state>: <target>,<cost> ...` listing the outgoing edges of one
/// state. The edges are kept in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct StateLine {
    name: StateName,
    edges: Vec<Edge>,
}

impl StateLine {
    pub const fn new(name: StateName, edges: Vec<Edge>) -> Self {
        Self { name, edges }
    }

    pub const fn name(&self) -> StateName {
        self.name
    }

    pub const fn edges(&self) -> &Vec<Edge> {
        &self.edges
    }
}
