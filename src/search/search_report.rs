//! The report printed after a search, in the line-oriented text format or as
//! JSON.

use crate::search::{
    search_engines::{SearchResult, SearchStatistics},
    Cost, StatePath,
};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    label: String,
    found_solution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    states_visited: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<StatePath>,
}

impl SearchReport {
    pub fn new(label: String, result: &SearchResult, statistics: &SearchStatistics) -> Self {
        match result.solution() {
            Some(solution) => Self {
                label,
                found_solution: true,
                states_visited: Some(statistics.expanded_nodes()),
                path_length: Some(solution.path().len()),
                total_cost: Some(solution.cost()),
                path: Some(solution.path().clone()),
            },
            None => Self {
                label,
                found_solution: false,
                states_visited: None,
                path_length: None,
                total_cost: None,
                path: None,
            },
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn found_solution(&self) -> bool {
        self.found_solution
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // A failed search only reports that it failed
        if !self.found_solution {
            return writeln!(f, "[FOUND_SOLUTION]: no");
        }
        writeln!(f, "# {}", self.label)?;
        writeln!(f, "[FOUND_SOLUTION]: yes")?;
        if let Some(states_visited) = self.states_visited {
            writeln!(f, "[STATES_VISITED]: {}", states_visited)?;
        }
        if let Some(path_length) = self.path_length {
            writeln!(f, "[PATH_LENGTH]: {}", path_length)?;
        }
        if let Some(total_cost) = self.total_cost {
            writeln!(f, "[TOTAL_COST]: {}", format_cost(total_cost.into_inner()))?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "[PATH]: {}", path)?;
        }
        Ok(())
    }
}

/// Plain decimal notation for magnitudes in `[1e-3, 1e7)` and zero, otherwise
/// scientific notation with an upper case `E` and at least one fractional
/// digit, e.g. `1.0E7` or `1.5E-5`.
fn format_cost(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0. || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}
