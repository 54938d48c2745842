//! Contains the parsed form of a heuristic file via the
//! [`HeuristicDescription`] type.

use crate::parsed_types::HeuristicEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicDescription(Vec<HeuristicEntry>);

impl HeuristicDescription {
    pub const fn new(entries: Vec<HeuristicEntry>) -> Self {
        Self(entries)
    }

    pub const fn entries(&self) -> &Vec<HeuristicEntry> {
        &self.0
    }
}
