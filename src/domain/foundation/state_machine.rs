//! Guarded transitions for status-like enums.

use super::ValidationError;

/// A closed set of states with an explicit transition relation.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable in one step, `self` excluded.
    fn valid_transitions(&self) -> Vec<Self>;

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            return Ok(target);
        }
        Err(ValidationError::invalid_format(
            "state_transition",
            format!("{:?} cannot move to {:?}", self, target),
        ))
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
