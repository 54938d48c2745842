use crate::error::PathError;
use crate::search::{Cost, StatePath, StateSpace};

/// Checks that `path` is a walk through `state_space` from its start state to
/// one of its goal states and returns the summed cost of the edges taken.
pub fn validate(path: &StatePath, state_space: &StateSpace) -> Result<Cost, PathError> {
    let Some(first) = path.first() else {
        return Err(PathError::Empty);
    };
    if first != state_space.start() {
        return Err(PathError::WrongStart {
            found: first,
            start: state_space.start(),
        });
    }

    let mut cost = Cost::from(0.);
    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        match state_space.transition_cost(from, to) {
            Some(step_cost) => cost = cost + step_cost,
            None => return Err(PathError::MissingTransition { from, to }),
        }
    }

    let last = path.last().unwrap_or(first);
    if !state_space.is_goal(last) {
        return Err(PathError::NotAGoal(last));
    }

    Ok(cost)
}
