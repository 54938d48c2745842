use crate::validation::Condition;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The property of a heuristic that a [`ValidationReport`] checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicProperty {
    Optimistic,
    Consistent,
}

impl HeuristicProperty {
    fn header(&self) -> &'static str {
        match self {
            HeuristicProperty::Optimistic => "HEURISTIC-OPTIMISTIC",
            HeuristicProperty::Consistent => "HEURISTIC-CONSISTENT",
        }
    }

    fn adjective(&self) -> &'static str {
        match self {
            HeuristicProperty::Optimistic => "optimistic",
            HeuristicProperty::Consistent => "consistent",
        }
    }
}

/// Every condition checked for one property, in the order they were checked.
/// The heuristic has the property iff all of them hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    property: HeuristicProperty,
    heuristic: String,
    conditions: Vec<Condition>,
    holds: bool,
}

impl ValidationReport {
    pub fn new(property: HeuristicProperty, heuristic: String, conditions: Vec<Condition>) -> Self {
        let holds = conditions.iter().all(Condition::holds);
        Self {
            property,
            heuristic,
            conditions,
            holds,
        }
    }

    pub fn property(&self) -> HeuristicProperty {
        self.property
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn holds(&self) -> bool {
        self.holds
    }

    pub fn num_failed(&self) -> usize {
        self.conditions.iter().filter(|c| !c.holds()).count()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {} {}", self.property.header(), self.heuristic)?;
        for condition in &self.conditions {
            writeln!(f, "{}", condition)?;
        }
        writeln!(
            f,
            "[CONCLUSION]: Heuristic is {}{}.",
            if self.holds { "" } else { "not " },
            self.property.adjective()
        )
    }
}
