//! Step bound invariant: the history never outruns the letter sequence.

use super::super::SessionView;
use super::Invariant;

/// Invariant: `0 <= step_index <= len(letters)`.
pub struct StepBoundedInvariant;

impl<S: SessionView> Invariant<S> for StepBoundedInvariant {
    fn holds(session: &S) -> bool {
        session.step_index() <= session.letters().len()
    }

    fn description() -> &'static str {
        "Step index never exceeds the letter sequence length"
    }
}
