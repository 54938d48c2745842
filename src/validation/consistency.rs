use crate::error::SearchError;
use crate::search::{Heuristic, StateSpace};
use crate::validation::{Condition, HeuristicProperty, ValidationReport};
use tracing::{debug, info};

/// Checks `h(source) <= h(target) + cost` for every edge of the state space,
/// ordered by source name and then by target name.
pub fn check_consistency(
    state_space: &StateSpace,
    heuristic: &dyn Heuristic,
    heuristic_label: &str,
) -> Result<ValidationReport, SearchError> {
    let mut conditions = Vec::with_capacity(state_space.num_transitions());
    for (source, transition) in state_space.transitions() {
        let condition = Condition::Consistent {
            source,
            target: transition.target,
            h_source: heuristic.evaluate(source)?,
            h_target: heuristic.evaluate(transition.target)?,
            cost: transition.cost,
        };
        debug!(source = %source, target = %transition.target, holds = condition.holds());
        conditions.push(condition);
    }

    let report = ValidationReport::new(
        HeuristicProperty::Consistent,
        heuristic_label.to_string(),
        conditions,
    );
    info!(
        edges = report.conditions().len(),
        failed = report.num_failed(),
        "checked consistency"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::HeuristicTable;
    use crate::test_utils::*;

    fn check(state_space_text: &str, heuristic_text: &str) -> ValidationReport {
        let state_space = StateSpace::from_text(state_space_text).unwrap();
        let heuristic = HeuristicTable::from_text(heuristic_text).unwrap();
        check_consistency(&state_space, &heuristic, "h.txt").unwrap()
    }

    #[test]
    fn true_costs_are_consistent() {
        let report = check(DETOUR_STATE_SPACE_TEXT, DETOUR_OPTIMAL_HEURISTIC_TEXT);
        assert!(report.holds());
        assert_eq!(report.conditions().len(), 5);
    }

    #[test]
    fn overestimate_breaks_consistency() {
        let report = check(DETOUR_STATE_SPACE_TEXT, DETOUR_INCONSISTENT_HEURISTIC_TEXT);
        assert!(!report.holds());
        assert_eq!(report.num_failed(), 1);
        assert_eq!(
            report.to_string(),
            "# HEURISTIC-CONSISTENT h.txt\n\
             [CONDITION]: [OK] h(A) <= h(C) + c: 0.0 <= 0.0 + 4.0\n\
             [CONDITION]: [ERR] h(B) <= h(C) + c: 4.0 <= 0.0 + 1.0\n\
             [CONDITION]: [OK] h(C) <= h(G) + c: 0.0 <= 0.0 + 2.0\n\
             [CONDITION]: [OK] h(S) <= h(A) + c: 0.0 <= 0.0 + 1.0\n\
             [CONDITION]: [OK] h(S) <= h(B) + c: 0.0 <= 4.0 + 2.0\n\
             [CONCLUSION]: Heuristic is not consistent.\n"
        );
    }

    #[test]
    fn zero_heuristic_is_consistent_without_negative_costs() {
        let report = check(UNREACHABLE_STATE_SPACE_TEXT, UNREACHABLE_ZERO_HEURISTIC_TEXT);
        assert!(report.holds());
    }

    #[test]
    fn missing_target_heuristic_is_an_error() {
        let state_space = StateSpace::from_text(TRIANGLE_STATE_SPACE_TEXT).unwrap();
        let heuristic = HeuristicTable::from_text("A: 0\nB: 0\n").unwrap();
        assert_eq!(
            check_consistency(&state_space, &heuristic, "h.txt").err(),
            Some(SearchError::MissingHeuristic("C".into()))
        );
    }
}
