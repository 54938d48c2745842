//! A path through the state space, as reported by the search engines. This
//! module provides the [`StatePath`] struct.

use crate::parsed_types::StateName;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatePath {
    states: Vec<StateName>,
}

impl StatePath {
    pub fn new(states: Vec<StateName>) -> Self {
        Self { states }
    }

    pub fn states(&self) -> &[StateName] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn first(&self) -> Option<StateName> {
        self.states.first().copied()
    }

    pub fn last(&self) -> Option<StateName> {
        self.states.last().copied()
    }
}

impl FromIterator<StateName> for StatePath {
    fn from_iter<I: IntoIterator<Item = StateName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Deref for StatePath {
    type Target = [StateName];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl Display for StatePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.states.iter().join(" => "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_arrows() {
        let path: StatePath = ["Pula", "Vodnjan", "Kanfanar"]
            .into_iter()
            .map(StateName::new)
            .collect();
        assert_eq!(path.to_string(), "Pula => Vodnjan => Kanfanar");
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(StateName::new("Pula")));
        assert_eq!(path.last(), Some(StateName::new("Kanfanar")));
    }

    #[test]
    fn serialises_as_list_of_names() {
        let path: StatePath = ["A", "B"].into_iter().map(StateName::new).collect();
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"["A","B"]"#);
    }
}
