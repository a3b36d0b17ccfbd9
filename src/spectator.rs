//! Two-spectator performance mode.
//!
//! Each spectator has their own choice stream, but every choice is folded
//! into the one shared session, in the order the choices arrive.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{info, instrument};

use crate::engine::{Choice, FilterSession, SessionError, Snapshot};

/// Which spectator made a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Spectator {
    /// Spectator 1.
    #[strum(to_string = "Spectator 1")]
    First,
    /// Spectator 2.
    #[strum(to_string = "Spectator 2")]
    Second,
}

/// Per-spectator choice histories for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SpectatorRound {
    /// Choices made by spectator 1.
    first: Vec<Choice>,
    /// Choices made by spectator 2.
    second: Vec<Choice>,
}

impl SpectatorRound {
    /// Creates an empty round.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the history for one spectator.
    pub fn history(&self, spectator: Spectator) -> &[Choice] {
        match spectator {
            Spectator::First => &self.first,
            Spectator::Second => &self.second,
        }
    }

    /// Records a choice for `spectator` and applies it to the shared session.
    ///
    /// # Errors
    ///
    /// Returns the session's error if it rejects the choice; the spectator's
    /// history is then left unchanged.
    #[instrument(skip(self, session))]
    pub fn choose(
        &mut self,
        session: &mut FilterSession,
        spectator: Spectator,
        choice: Choice,
    ) -> Result<Snapshot, SessionError> {
        let snapshot = session.apply_choice(choice)?;
        match spectator {
            Spectator::First => self.first.push(choice),
            Spectator::Second => self.second.push(choice),
        }
        info!(
            %spectator,
            choices = self.history(spectator).len(),
            "Spectator choice recorded"
        );
        Ok(snapshot)
    }

    /// Clears both histories and resets the shared session.
    #[instrument(skip(self, session))]
    pub fn reset(&mut self, session: &mut FilterSession) -> Snapshot {
        self.first.clear();
        self.second.clear();
        session.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LetterSequence, WordList};

    fn session(letters: &str) -> FilterSession {
        FilterSession::with_word_list(
            WordList::new("t", "Test", ["Necessary", "Toothbrush", "Remember"]),
            LetterSequence::new(letters).unwrap(),
        )
    }

    #[test]
    fn test_choices_fold_into_shared_session() {
        let mut session = session("NTR");
        let mut round = SpectatorRound::new();

        round.choose(&mut session, Spectator::First, Choice::Left).unwrap();
        let snap = round
            .choose(&mut session, Spectator::Second, Choice::Right)
            .unwrap();

        assert_eq!(round.first(), &[Choice::Left]);
        assert_eq!(round.second(), &[Choice::Right]);
        assert_eq!(snap.choice_history(), &[Choice::Left, Choice::Right]);
        assert_eq!(*snap.step_index(), 2);
    }

    #[test]
    fn test_rejected_choice_not_recorded() {
        let mut session = session("N");
        let mut round = SpectatorRound::new();

        round.choose(&mut session, Spectator::First, Choice::Left).unwrap();
        assert!(round
            .choose(&mut session, Spectator::Second, Choice::Left)
            .is_err());
        assert!(round.second().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session("NT");
        let mut round = SpectatorRound::new();
        round.choose(&mut session, Spectator::First, Choice::Left).unwrap();

        let snap = round.reset(&mut session);
        assert_eq!(round, SpectatorRound::default());
        assert_eq!(*snap.step_index(), 0);
    }
}
