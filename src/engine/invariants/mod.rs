//! First-class invariants for reading sessions.
//!
//! Invariants are logical properties that hold after every transition.
//! They are testable independently and document the guarantees a caller
//! can rely on when rendering a snapshot.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod pools_derivable;
pub mod pools_ordered;
pub mod step_bounded;

pub use pools_derivable::PoolsDerivableInvariant;
pub use pools_ordered::PoolsOrderedInvariant;
pub use step_bounded::StepBoundedInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    StepBoundedInvariant,
    PoolsDerivableInvariant,
    PoolsOrderedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        Choice, LetterSequence, SessionInProgress, SessionResult, WordList,
    };
    use std::sync::Arc;

    fn list() -> Arc<WordList> {
        Arc::new(WordList::new(
            "t",
            "Test",
            ["Necessary", "Toothbrush", "Remember", "Loveable"],
        ))
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = SessionInProgress::start(list(), LetterSequence::new("NTRL").unwrap());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_choices() {
        let history = [Choice::Right, Choice::Left, Choice::Right];
        match SessionInProgress::replay(list(), LetterSequence::new("NTRL").unwrap(), &history) {
            Ok(SessionResult::InProgress(session)) => {
                assert!(SessionInvariants::check_all(&session).is_ok());
            }
            other => panic!("Expected in-progress session, got {:?}", other),
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = SessionInProgress::start(list(), LetterSequence::new("NTRL").unwrap());
        session.history = vec![Choice::Left; 5];

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = SessionInProgress::start(list(), LetterSequence::new("NT").unwrap());

        type TwoInvariants = (StepBoundedInvariant, PoolsOrderedInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
