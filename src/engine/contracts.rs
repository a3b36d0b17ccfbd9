//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, choice)} apply_choice {Q(before, after)}

use super::action::SessionError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::typestate::{SessionInProgress, SessionView};
use super::types::Choice;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post<T: SessionView>(before: &S, after: &T) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Choice Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a letter must remain to be probed.
pub struct LetterAvailable;

impl LetterAvailable {
    /// Fails with [`SessionError::InvalidState`] once every letter is used.
    #[instrument(skip(session))]
    pub fn check<S: SessionView>(session: &S) -> Result<(), SessionError> {
        if session.step_index() >= session.letters().len() {
            warn!(
                step = session.step_index(),
                letters = session.letters().len(),
                "Choice rejected: session complete"
            );
            Err(SessionError::InvalidState(format!(
                "session is complete ({} of {} letters used)",
                session.step_index(),
                session.letters().len()
            )))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Choice Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: the new history is the old one plus exactly one choice.
pub struct HistoryExtended;

impl HistoryExtended {
    /// Returns true if `after` extends `before` by one choice.
    #[instrument(skip(before, after))]
    pub fn holds<B: SessionView, A: SessionView>(before: &B, after: &A) -> bool {
        let old = before.history();
        let new = after.history();
        let valid = new.len() == old.len() + 1 && new.starts_with(old);
        if !valid {
            warn!(before = old.len(), after = new.len(), "History not extended by one");
        }
        valid
    }
}

/// Postcondition: pools never grow along a history prefix.
pub struct PoolsShrink;

impl PoolsShrink {
    /// Returns true if neither pool grew.
    #[instrument(skip(before, after))]
    pub fn holds<B: SessionView, A: SessionView>(before: &B, after: &A) -> bool {
        let left_ok = after.pools().left().len() <= before.pools().left().len();
        let right_ok = after.pools().right().len() <= before.pools().right().len();
        let valid = left_ok && right_ok;
        if !valid {
            warn!(
                left_before = before.pools().left().len(),
                left_after = after.pools().left().len(),
                right_before = before.pools().right().len(),
                right_after = after.pools().right().len(),
                "Pools grew after a choice"
            );
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Choice Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for choice actions.
///
/// Preconditions:
/// - A letter remains
///
/// Postconditions:
/// - History extended by exactly one choice
/// - Pools did not grow
/// - All session invariants hold
pub struct ChoiceContract;

impl Contract<SessionInProgress, Choice> for ChoiceContract {
    fn pre(session: &SessionInProgress, _choice: &Choice) -> Result<(), SessionError> {
        LetterAvailable::check(session)
    }

    fn post<T: SessionView>(before: &SessionInProgress, after: &T) -> Result<(), SessionError> {
        let mut failures = Vec::new();

        if !HistoryExtended::holds(before, after) {
            failures.push("History extended by exactly one choice".to_string());
        }
        if !PoolsShrink::holds(before, after) {
            failures.push("Pools never grow".to_string());
        }
        if let Err(violations) = SessionInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(SessionError::InvariantViolation(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}
