use crate::error::{LoadError, SearchError};
use crate::parsed_types::{HeuristicDescription, StateName};
use crate::parsers::{error_line, Parser};
use crate::search::{Heuristic, HeuristicValue};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A heuristic given as an explicit table of per-state estimates, loaded from
/// a heuristic file.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTable {
    values: HashMap<StateName, HeuristicValue>,
}

impl HeuristicTable {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let description =
            HeuristicDescription::from_str(text).map_err(|e| LoadError::Parse {
                what: "heuristic description",
                line: error_line(text, &e).unwrap_or_else(|| text.lines().count()),
            })?;
        Ok(Self::from_description(&description))
    }

    pub fn from_description(description: &HeuristicDescription) -> Self {
        let mut values = HashMap::new();
        for entry in description.entries() {
            if values
                .insert(entry.state(), OrderedFloat(entry.value()))
                .is_some()
            {
                warn!(state = %entry.state(), "heuristic listed more than once, keeping the last value");
            }
        }
        info!(states = values.len(), "loaded heuristic table");
        Self { values }
    }

    pub fn get(&self, state: StateName) -> Option<HeuristicValue> {
        self.values.get(&state).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StateName, f64)> for HeuristicTable {
    fn from_iter<I: IntoIterator<Item = (StateName, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(state, value)| (state, OrderedFloat(value)))
                .collect(),
        }
    }
}

impl Heuristic for HeuristicTable {
    fn evaluate(&self, state: StateName) -> Result<HeuristicValue, SearchError> {
        self.get(state).ok_or(SearchError::MissingHeuristic(state))
    }
}
