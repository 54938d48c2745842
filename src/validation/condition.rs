use crate::parsed_types::StateName;
use crate::search::{Cost, HeuristicValue};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One inequality checked by the heuristic validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// `h(state) <= h*(state)`, where `h*` is the cost of the cheapest path
    /// from `state` to any goal, or infinity if there is none.
    Optimistic {
        state: StateName,
        h: HeuristicValue,
        h_star: Cost,
    },
    /// `h(source) <= h(target) + cost` for the edge `source -> target`.
    Consistent {
        source: StateName,
        target: StateName,
        h_source: HeuristicValue,
        h_target: HeuristicValue,
        cost: Cost,
    },
}

impl Condition {
    pub fn holds(&self) -> bool {
        match *self {
            Condition::Optimistic { h, h_star, .. } => h <= h_star,
            Condition::Consistent {
                h_source,
                h_target,
                cost,
                ..
            } => h_source <= h_target + cost,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = if self.holds() { "OK" } else { "ERR" };
        match self {
            Condition::Optimistic { state, h, h_star } => write!(
                f,
                "[CONDITION]: [{}] h({}) <= h*: {} <= {}",
                tag,
                state,
                one_decimal(h.into_inner()),
                one_decimal(h_star.into_inner())
            ),
            Condition::Consistent {
                source,
                target,
                h_source,
                h_target,
                cost,
            } => write!(
                f,
                "[CONDITION]: [{}] h({}) <= h({}) + c: {} <= {} + {}",
                tag,
                source,
                target,
                one_decimal(h_source.into_inner()),
                one_decimal(h_target.into_inner()),
                one_decimal(cost.into_inner())
            ),
        }
    }
}

/// Formats `value` with one decimal, rounding ties away from zero.
fn one_decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}", (value * 10.).round() / 10.)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn optimistic_condition() {
        let condition = Condition::Optimistic {
            state: StateName::new("S"),
            h: OrderedFloat(1.),
            h_star: OrderedFloat(2.),
        };
        assert!(condition.holds());
        assert_eq!(
            condition.to_string(),
            "[CONDITION]: [OK] h(S) <= h*: 1.0 <= 2.0"
        );
    }

    #[test]
    fn unreachable_state_is_always_optimistic() {
        let condition = Condition::Optimistic {
            state: StateName::new("S"),
            h: OrderedFloat(1e9),
            h_star: OrderedFloat(f64::INFINITY),
        };
        assert!(condition.holds());
        assert_eq!(
            condition.to_string(),
            "[CONDITION]: [OK] h(S) <= h*: 1000000000.0 <= inf"
        );
    }

    #[test]
    fn inconsistent_edge() {
        let condition = Condition::Consistent {
            source: StateName::new("U"),
            target: StateName::new("V"),
            h_source: OrderedFloat(4.),
            h_target: OrderedFloat(0.),
            cost: OrderedFloat(1.),
        };
        assert!(!condition.holds());
        assert_eq!(
            condition.to_string(),
            "[CONDITION]: [ERR] h(U) <= h(V) + c: 4.0 <= 0.0 + 1.0"
        );
    }

    #[test]
    fn values_are_rounded_to_one_decimal() {
        let condition = Condition::Consistent {
            source: StateName::new("U"),
            target: StateName::new("V"),
            h_source: OrderedFloat(2.26),
            h_target: OrderedFloat(1.04),
            cost: OrderedFloat(1.5),
        };
        assert!(condition.holds());
        assert_eq!(
            condition.to_string(),
            "[CONDITION]: [OK] h(U) <= h(V) + c: 2.3 <= 1.0 + 1.5"
        );
    }

    #[test]
    fn values_are_rounded_half_up() {
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(1.25), "1.3");
        assert_eq!(one_decimal(2.25), "2.3");
        assert_eq!(one_decimal(0.24), "0.2");
        assert_eq!(one_decimal(3.), "3.0");
        assert_eq!(one_decimal(f64::INFINITY), "inf");

        let condition = Condition::Optimistic {
            state: StateName::new("S"),
            h: OrderedFloat(0.25),
            h_star: OrderedFloat(1.25),
        };
        assert_eq!(
            condition.to_string(),
            "[CONDITION]: [OK] h(S) <= h*: 0.3 <= 1.3"
        );
    }
}
