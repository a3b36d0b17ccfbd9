//! Runtime session wrapper over the typestate phases.
//!
//! [`FilterSession`] is the single owned value a caller mutates through
//! `&mut self`. Every mutating call either commits a fully recomputed phase
//! or returns an error with the previous phase untouched.

use super::action::SessionError;
use super::typestate::{SessionComplete, SessionIdle, SessionInProgress, SessionResult, SessionView};
use super::types::{Choice, CurrentLetter, LetterSequence, Pools, WordList};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::Display;
use tracing::{info, instrument, warn};

/// Coarse phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SessionStatus {
    /// No word list bound.
    Idle,
    /// Accepting choices.
    InProgress,
    /// Every letter used.
    Complete,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle(SessionIdle),
    InProgress(SessionInProgress),
    Complete(SessionComplete),
}

impl From<SessionResult> for Phase {
    fn from(result: SessionResult) -> Self {
        match result {
            SessionResult::InProgress(s) => Phase::InProgress(s),
            SessionResult::Complete(s) => Phase::Complete(s),
        }
    }
}

/// Read-only view of a session handed to the caller after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Bound word list id, if any.
    word_list_id: Option<String>,
    /// Position of the next letter to apply.
    step_index: usize,
    /// Choices made so far.
    choice_history: Vec<Choice>,
    /// Left-pattern pool.
    left_pool: Vec<String>,
    /// Right-pattern pool.
    right_pool: Vec<String>,
    /// True once every letter is used.
    is_complete: bool,
    /// Next letter to probe, or done.
    current_letter: CurrentLetter,
}

/// A reading session driven one choice at a time.
#[derive(Debug, Clone)]
pub struct FilterSession {
    phase: Phase,
}

impl FilterSession {
    /// Creates an idle session with no word list.
    #[instrument]
    pub fn new(letters: LetterSequence) -> Self {
        Self {
            phase: Phase::Idle(SessionIdle::new(letters)),
        }
    }

    /// Creates a session already bound to a word list.
    #[instrument(skip(word_list), fields(list = %word_list.id()))]
    pub fn with_word_list(word_list: WordList, letters: LetterSequence) -> Self {
        Self {
            phase: Phase::InProgress(SessionInProgress::start(Arc::new(word_list), letters)),
        }
    }

    /// Binds a new word list, discarding any progress.
    #[instrument(skip(self, word_list), fields(list = %word_list.id()))]
    pub fn select_word_list(&mut self, word_list: WordList) -> Snapshot {
        info!(words = word_list.len(), "Selecting word list");
        let word_list = Arc::new(word_list);
        let next = match &self.phase {
            Phase::Idle(s) => s.clone().select_word_list(word_list),
            Phase::InProgress(s) => SessionInProgress::start(word_list, s.letters().clone()),
            Phase::Complete(s) => SessionInProgress::start(word_list, s.letters().clone()),
        };
        self.phase = Phase::InProgress(next);
        self.snapshot()
    }

    /// Applies one choice and recomputes both pools.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidState`] if the session is idle or
    /// complete. The session is left unchanged.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn apply_choice(&mut self, choice: Choice) -> Result<Snapshot, SessionError> {
        let next = match &self.phase {
            Phase::InProgress(session) => session.clone().apply_choice(choice)?,
            Phase::Idle(_) => {
                warn!("Choice rejected: no word list selected");
                return Err(SessionError::InvalidState(
                    "no word list selected".to_string(),
                ));
            }
            Phase::Complete(session) => {
                warn!(steps = session.step_index(), "Choice rejected: session complete");
                return Err(SessionError::InvalidState(format!(
                    "session is complete ({} of {} letters used)",
                    session.step_index(),
                    session.letters().len()
                )));
            }
        };

        self.phase = next.into();
        Ok(self.snapshot())
    }

    /// Returns to step 0 with the same word list. A no-op while idle.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn reset(&mut self) -> Snapshot {
        let phase = match &self.phase {
            Phase::Idle(_) => None,
            Phase::InProgress(s) => Some(SessionInProgress::start(
                Arc::clone(s.word_list_handle()),
                s.letters().clone(),
            )),
            Phase::Complete(s) => Some(SessionInProgress::start(
                Arc::clone(s.word_list_handle()),
                s.letters().clone(),
            )),
        };
        if let Some(fresh) = phase {
            info!("Session reset");
            self.phase = Phase::InProgress(fresh);
        }
        self.snapshot()
    }

    /// Parses and installs a new letter sequence, then resets.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidArgument`] for an empty sequence. The
    /// session is left unchanged.
    #[instrument(skip(self))]
    pub fn set_letter_sequence(&mut self, sequence: &str) -> Result<Snapshot, SessionError> {
        let letters = LetterSequence::new(sequence).inspect_err(|e| {
            warn!(error = %e, "Letter sequence rejected");
        })?;
        Ok(self.use_letters(letters))
    }

    /// Installs an already validated letter sequence, then resets.
    #[instrument(skip(self))]
    pub fn use_letters(&mut self, letters: LetterSequence) -> Snapshot {
        info!(letters = %letters, "Replacing letter sequence");
        self.phase = match &self.phase {
            Phase::Idle(s) => Phase::Idle(s.clone().with_letters(letters)),
            Phase::InProgress(s) => Phase::InProgress(SessionInProgress::start(
                Arc::clone(s.word_list_handle()),
                letters,
            )),
            Phase::Complete(s) => Phase::InProgress(SessionInProgress::start(
                Arc::clone(s.word_list_handle()),
                letters,
            )),
        };
        self.snapshot()
    }

    /// Returns the current phase.
    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::Idle(_) => SessionStatus::Idle,
            Phase::InProgress(_) => SessionStatus::InProgress,
            Phase::Complete(_) => SessionStatus::Complete,
        }
    }

    fn view(&self) -> Option<&dyn SessionView> {
        match &self.phase {
            Phase::Idle(_) => None,
            Phase::InProgress(s) => Some(s as &dyn SessionView),
            Phase::Complete(s) => Some(s as &dyn SessionView),
        }
    }

    /// Returns the active letter sequence.
    pub fn letters(&self) -> &LetterSequence {
        match &self.phase {
            Phase::Idle(s) => s.letters(),
            Phase::InProgress(s) => s.letters(),
            Phase::Complete(s) => s.letters(),
        }
    }

    /// Returns the bound word list, if any.
    pub fn word_list(&self) -> Option<&WordList> {
        self.view().map(|v| v.word_list())
    }

    /// Position of the next letter to apply.
    pub fn step_index(&self) -> usize {
        self.view().map_or(0, |v| v.step_index())
    }

    /// Choices made so far.
    pub fn history(&self) -> &[Choice] {
        self.view().map(|v| v.history()).unwrap_or_default()
    }

    /// Current pools. Empty while idle.
    pub fn pools(&self) -> Pools {
        self.view().map(|v| v.pools().clone()).unwrap_or_default()
    }

    /// True once every letter is used.
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete(_))
    }

    /// Next letter to probe, or done.
    pub fn current_letter(&self) -> CurrentLetter {
        match self.view() {
            Some(v) => v.current_letter(),
            None => self
                .letters()
                .get(0)
                .map_or(CurrentLetter::Done, CurrentLetter::Letter),
        }
    }

    /// Letters already applied, in order.
    pub fn used_letters(&self) -> &[char] {
        self.view().map(|v| v.used_letters()).unwrap_or_default()
    }

    /// Builds a read-only snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let (left_pool, right_pool) = self.pools().into_parts();
        Snapshot {
            word_list_id: self.word_list().map(|l| l.id().clone()),
            step_index: self.step_index(),
            choice_history: self.history().to_vec(),
            left_pool,
            right_pool,
            is_complete: self.is_complete(),
            current_letter: self.current_letter(),
        }
    }
}
