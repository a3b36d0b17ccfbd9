//! Phase-specific typestate structs for a reading session.
//!
//! Each phase is its own type. A `SessionComplete` has no `apply_choice`,
//! and a `SessionIdle` has no pools because no word list is bound yet.

use super::action::SessionError;
use super::contracts::{ChoiceContract, Contract};
use super::filter::compute_pools;
use super::types::{Choice, CurrentLetter, LetterSequence, Pools, WordList};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Read access shared by every phase that has a bound word list.
///
/// Invariants and contracts are written against this trait so they apply
/// to in-progress and complete sessions alike.
pub trait SessionView {
    /// The bound word list.
    fn word_list(&self) -> &WordList;
    /// The active letter sequence.
    fn letters(&self) -> &LetterSequence;
    /// Choices made so far, one per used letter.
    fn history(&self) -> &[Choice];
    /// Pools derived from the history.
    fn pools(&self) -> &Pools;

    /// Position of the next letter to apply.
    fn step_index(&self) -> usize {
        self.history().len()
    }

    /// True once every letter has been used.
    fn is_complete(&self) -> bool {
        self.step_index() == self.letters().len()
    }

    /// The next letter to probe, or [`CurrentLetter::Done`].
    fn current_letter(&self) -> CurrentLetter {
        self.letters()
            .get(self.step_index())
            .map_or(CurrentLetter::Done, CurrentLetter::Letter)
    }

    /// Letters already applied, in order.
    fn used_letters(&self) -> &[char] {
        &self.letters().letters()[..self.step_index()]
    }
}

// ─────────────────────────────────────────────────────────────
//  Idle Phase
// ─────────────────────────────────────────────────────────────

/// Session with a letter sequence but no word list yet.
#[derive(Debug, Clone)]
pub struct SessionIdle {
    letters: LetterSequence,
}

impl SessionIdle {
    /// Creates an idle session for the given letters.
    #[instrument]
    pub fn new(letters: LetterSequence) -> Self {
        Self { letters }
    }

    /// Returns the letter sequence.
    pub fn letters(&self) -> &LetterSequence {
        &self.letters
    }

    /// Binds a word list (consumes idle, returns in-progress).
    #[instrument(skip(self, word_list), fields(list = %word_list.id()))]
    pub fn select_word_list(self, word_list: Arc<WordList>) -> SessionInProgress {
        SessionInProgress::start(word_list, self.letters)
    }

    /// Replaces the letter sequence.
    #[instrument(skip(self))]
    pub fn with_letters(self, letters: LetterSequence) -> Self {
        Self { letters }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Session accepting choices.
///
/// Invariants enforced by type:
/// - a word list is bound
/// - at least one letter remains
#[derive(Debug, Clone)]
pub struct SessionInProgress {
    pub(super) word_list: Arc<WordList>,
    pub(super) letters: LetterSequence,
    pub(super) history: Vec<Choice>,
    pub(super) pools: Pools,
}

impl SessionInProgress {
    /// Starts a fresh session: step 0, both pools equal to the full list.
    #[instrument(skip(word_list), fields(list = %word_list.id(), words = word_list.len()))]
    pub fn start(word_list: Arc<WordList>, letters: LetterSequence) -> Self {
        info!(letters = %letters, "Starting session");
        let pools = Pools::full(word_list.words());
        Self {
            word_list,
            letters,
            history: Vec::new(),
            pools,
        }
    }

    /// Applies a choice, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(step = self.history.len()))]
    pub fn apply_choice(self, choice: Choice) -> Result<SessionResult, SessionError> {
        ChoiceContract::pre(&self, &choice)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut session = self;
        session.history.push(choice);
        session.pools = compute_pools(session.word_list.words(), &session.history, &session.letters)?;

        #[cfg(debug_assertions)]
        ChoiceContract::post(&before, &session)?;

        debug!(
            step = session.history.len(),
            left = session.pools.left().len(),
            right = session.pools.right().len(),
            "Choice applied"
        );

        if session.is_complete() {
            info!(history = %Choice::format_sequence(&session.history), "Session complete");
            return Ok(SessionResult::Complete(SessionComplete {
                word_list: session.word_list,
                letters: session.letters,
                history: session.history,
                pools: session.pools,
            }));
        }

        Ok(SessionResult::InProgress(session))
    }

    /// Replays a whole history from step 0.
    #[instrument(skip(word_list), fields(list = %word_list.id()))]
    pub fn replay(
        word_list: Arc<WordList>,
        letters: LetterSequence,
        history: &[Choice],
    ) -> Result<SessionResult, SessionError> {
        let mut session = Self::start(word_list, letters);

        for choice in history {
            match session.apply_choice(*choice)? {
                SessionResult::InProgress(s) => session = s,
                SessionResult::Complete(s) => {
                    if s.history().len() < history.len() {
                        return Err(SessionError::InvalidState(format!(
                            "history has {} choices but the session completed after {}",
                            history.len(),
                            s.history().len()
                        )));
                    }
                    return Ok(SessionResult::Complete(s));
                }
            }
        }

        Ok(SessionResult::InProgress(session))
    }

    /// Returns to step 0 with the same word list.
    #[instrument(skip(self))]
    pub fn reset(self) -> SessionInProgress {
        Self::start(self.word_list, self.letters)
    }

    /// Shared handle to the bound word list.
    pub fn word_list_handle(&self) -> &Arc<WordList> {
        &self.word_list
    }
}

impl SessionView for SessionInProgress {
    fn word_list(&self) -> &WordList {
        &self.word_list
    }

    fn letters(&self) -> &LetterSequence {
        &self.letters
    }

    fn history(&self) -> &[Choice] {
        &self.history
    }

    fn pools(&self) -> &Pools {
        &self.pools
    }
}

// ─────────────────────────────────────────────────────────────
//  Complete Phase
// ─────────────────────────────────────────────────────────────

/// Session with every letter used.
///
/// There is no `apply_choice` here; the only ways out are a reset or a new
/// word list.
#[derive(Debug, Clone)]
pub struct SessionComplete {
    word_list: Arc<WordList>,
    letters: LetterSequence,
    history: Vec<Choice>,
    pools: Pools,
}

impl SessionComplete {
    /// Restarts with the same word list (consumes complete, returns in-progress).
    #[instrument(skip(self))]
    pub fn reset(self) -> SessionInProgress {
        SessionInProgress::start(self.word_list, self.letters)
    }

    /// Shared handle to the bound word list.
    pub fn word_list_handle(&self) -> &Arc<WordList> {
        &self.word_list
    }
}

impl SessionView for SessionComplete {
    fn word_list(&self) -> &WordList {
        &self.word_list
    }

    fn letters(&self) -> &LetterSequence {
        &self.letters
    }

    fn history(&self) -> &[Choice] {
        &self.history
    }

    fn pools(&self) -> &Pools {
        &self.pools
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a choice.
#[derive(Debug)]
pub enum SessionResult {
    /// More letters remain.
    InProgress(SessionInProgress),
    /// The last letter was used.
    Complete(SessionComplete),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Arc<WordList> {
        Arc::new(WordList::new("t", "Test", ["Alpha", "Bravo", "Charlie"]))
    }

    #[test]
    fn test_idle_binds_list() {
        let idle = SessionIdle::new(LetterSequence::new("AB").unwrap());
        let session = idle.select_word_list(list());
        assert_eq!(session.step_index(), 0);
        assert_eq!(session.pools().left().len(), 3);
        assert_eq!(session.current_letter(), CurrentLetter::Letter('A'));
    }

    #[test]
    fn test_last_choice_completes() {
        let session = SessionInProgress::start(list(), LetterSequence::new("AB").unwrap());
        let session = match session.apply_choice(Choice::Left).unwrap() {
            SessionResult::InProgress(s) => s,
            SessionResult::Complete(_) => panic!("One letter should remain"),
        };
        assert_eq!(session.current_letter(), CurrentLetter::Letter('B'));

        match session.apply_choice(Choice::Right).unwrap() {
            SessionResult::Complete(done) => {
                assert!(done.is_complete());
                assert_eq!(done.current_letter(), CurrentLetter::Done);
                assert_eq!(done.used_letters(), &['A', 'B']);
            }
            SessionResult::InProgress(_) => panic!("Session should be complete"),
        }
    }

    #[test]
    fn test_replay_rejects_overlong_history() {
        let result = SessionInProgress::replay(
            list(),
            LetterSequence::new("A").unwrap(),
            &[Choice::Left, Choice::Left],
        );
        assert!(matches!(result, Err(SessionError::InvalidState(_))));
    }

    #[test]
    fn test_complete_reset_restores_pools() {
        let result = SessionInProgress::replay(
            list(),
            LetterSequence::new("A").unwrap(),
            &[Choice::Right],
        )
        .unwrap();
        let SessionResult::Complete(done) = result else {
            panic!("Expected complete session");
        };
        let fresh = done.reset();
        assert_eq!(fresh.step_index(), 0);
        assert_eq!(fresh.pools(), &Pools::full(fresh.word_list().words()));
    }
}
