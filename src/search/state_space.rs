use crate::error::LoadError;
use crate::parsed_types::{StateName, StateSpaceDescription};
use crate::parsers::{error_line, Parser};
use crate::search::{Cost, Transition};
use ordered_float::OrderedFloat;
use std::collections::{btree_map::Entry, BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// The immutable adjacency template of a state space: the start state, the
/// goal states and the outgoing transitions of every state that has its own
/// line in the description. A state only referenced as a transition target
/// has no successors.
#[derive(Debug, Clone)]
pub struct StateSpace {
    start: StateName,
    goals: HashSet<StateName>,
    transitions: BTreeMap<StateName, Vec<Transition>>,
}

impl StateSpace {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let description =
            StateSpaceDescription::from_str(text).map_err(|e| LoadError::Parse {
                what: "state space description",
                line: error_line(text, &e).unwrap_or_else(|| text.lines().count()),
            })?;
        Ok(Self::from_description(&description))
    }

    pub fn from_description(description: &StateSpaceDescription) -> Self {
        let mut transitions = BTreeMap::new();
        for state_line in description.states() {
            // Successors are kept sorted by target name; of several edges to
            // one target only the cheapest is kept.
            let mut successors: BTreeMap<StateName, Cost> = BTreeMap::new();
            for edge in state_line.edges() {
                match successors.entry(edge.target()) {
                    Entry::Vacant(entry) => {
                        entry.insert(OrderedFloat(edge.cost()));
                    }
                    Entry::Occupied(mut entry) => {
                        warn!(
                            state = %state_line.name(),
                            target = %edge.target(),
                            "duplicate edge, keeping the cheapest one"
                        );
                        if OrderedFloat(edge.cost()) < *entry.get() {
                            entry.insert(OrderedFloat(edge.cost()));
                        }
                    }
                }
            }
            let successors = successors
                .into_iter()
                .map(|(target, cost)| Transition::new(target, cost))
                .collect();

            if transitions.insert(state_line.name(), successors).is_some() {
                warn!(
                    state = %state_line.name(),
                    "state listed more than once, keeping the last line"
                );
            }
        }

        let state_space = Self {
            start: description.start(),
            goals: description.goals().iter().copied().collect(),
            transitions,
        };
        info!(
            start = %state_space.start,
            goals = state_space.goals.len(),
            states = state_space.num_states(),
            transitions = state_space.num_transitions(),
            "loaded state space"
        );
        state_space
    }

    pub fn start(&self) -> StateName {
        self.start
    }

    pub fn goals(&self) -> &HashSet<StateName> {
        &self.goals
    }

    #[inline(always)]
    pub fn is_goal(&self, state: StateName) -> bool {
        self.goals.contains(&state)
    }

    /// The transitions out of `state`, sorted by target name. Empty if the
    /// state has no line of its own.
    #[inline(always)]
    pub fn successors(&self, state: StateName) -> &[Transition] {
        self.transitions
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The cost of the transition from `from` to `to`, if there is one.
    pub fn transition_cost(&self, from: StateName, to: StateName) -> Option<Cost> {
        self.successors(from)
            .iter()
            .find(|transition| transition.target == to)
            .map(|transition| transition.cost)
    }

    /// Every state with a line of its own, in alphabetical order.
    pub fn states(&self) -> impl Iterator<Item = StateName> + '_ {
        self.transitions.keys().copied()
    }

    /// Every transition as a `(source, transition)` pair, ordered by source
    /// name and then by target name.
    pub fn transitions(&self) -> impl Iterator<Item = (StateName, &Transition)> + '_ {
        self.transitions.iter().flat_map(|(&source, successors)| {
            successors.iter().map(move |transition| (source, transition))
        })
    }

    pub fn num_states(&self) -> usize {
        self.transitions.len()
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn from_text_works() {
        let state_space = StateSpace::from_text(TRIANGLE_STATE_SPACE_TEXT).unwrap();
        assert_eq!(state_space.start(), "A".into());
        assert!(state_space.is_goal("C".into()));
        assert!(!state_space.is_goal("A".into()));
        assert_eq!(state_space.num_states(), 3);
        assert_eq!(state_space.num_transitions(), 3);
        assert_eq!(
            state_space.successors("A".into()),
            &[
                Transition::new("B".into(), OrderedFloat(1.)),
                Transition::new("C".into(), OrderedFloat(4.)),
            ]
        );
        assert!(state_space.successors("C".into()).is_empty());
    }

    #[test]
    fn successors_are_sorted_by_name() {
        let state_space = StateSpace::from_text("S\nG\nS: Z,1 G,5 M,2\n").unwrap();
        let targets: Vec<&str> = state_space
            .successors("S".into())
            .iter()
            .map(|transition| transition.target.as_str())
            .collect();
        assert_eq!(targets, vec!["G", "M", "Z"]);
    }

    #[test]
    fn unknown_state_has_no_successors() {
        let state_space = StateSpace::from_text(TRIANGLE_STATE_SPACE_TEXT).unwrap();
        assert!(state_space.successors("Nowhere".into()).is_empty());
    }

    #[test]
    fn cheapest_duplicate_edge_wins() {
        let state_space = StateSpace::from_text("S\nG\nS: G,5 G,1 G,3\n").unwrap();
        assert_eq!(
            state_space.transition_cost("S".into(), "G".into()),
            Some(OrderedFloat(1.))
        );
        assert_eq!(state_space.num_transitions(), 1);
    }

    #[test]
    fn last_duplicate_line_wins() {
        let state_space = StateSpace::from_text("S\nG\nS: G,5\nS: G,1\n").unwrap();
        assert_eq!(state_space.num_states(), 1);
        assert_eq!(
            state_space.transition_cost("S".into(), "G".into()),
            Some(OrderedFloat(1.))
        );
    }

    #[test]
    fn states_and_transitions_are_alphabetical() {
        let state_space = StateSpace::from_text(DETOUR_STATE_SPACE_TEXT).unwrap();
        let states: Vec<StateName> = state_space.states().collect();
        assert_eq!(
            states,
            vec!["A".into(), "B".into(), "C".into(), "G".into(), "S".into()]
        );
        let transitions: Vec<_> = state_space.transitions().collect();
        let pairs: Vec<(&str, &str)> = transitions
            .iter()
            .map(|(source, transition)| (source.as_str(), transition.target.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("A", "C"), ("B", "C"), ("C", "G"), ("S", "A"), ("S", "B")]
        );
    }

    #[test]
    fn parse_error_reports_line() {
        let text = "# comment\nA\nB\nA: B,1\nB C\n";
        match StateSpace::from_text(text) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn from_path_works() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRIANGLE_STATE_SPACE_TEXT.as_bytes()).unwrap();
        let state_space = StateSpace::from_path(file.path()).unwrap();
        assert_eq!(state_space.num_states(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StateSpace::from_path(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
