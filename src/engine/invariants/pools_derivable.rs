//! Derivability invariant: pools carry no state of their own.

use super::super::{SessionView, compute_pools};
use super::Invariant;

/// Invariant: the pools equal a fresh derivation from
/// `(word list, letters, history)`.
///
/// Nothing is ever patched into a pool incrementally, so recomputing from
/// scratch must reproduce exactly what the session holds.
pub struct PoolsDerivableInvariant;

impl<S: SessionView> Invariant<S> for PoolsDerivableInvariant {
    fn holds(session: &S) -> bool {
        match compute_pools(session.word_list().words(), session.history(), session.letters()) {
            Ok(fresh) => &fresh == session.pools(),
            Err(_) => false,
        }
    }

    fn description() -> &'static str {
        "Pools are re-derivable from the word list, letters, and history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Choice, LetterSequence, Pools, SessionInProgress, SessionResult, WordList};
    use std::sync::Arc;

    fn list() -> Arc<WordList> {
        Arc::new(WordList::new("t", "Test", ["Umbrella", "Antidote", "Impression"]))
    }

    #[test]
    fn test_fresh_session_holds() {
        let s = SessionInProgress::start(list(), LetterSequence::new("UAI").unwrap());
        assert!(PoolsDerivableInvariant::holds(&s));
    }

    #[test]
    fn test_after_choice_holds() {
        let s = SessionInProgress::start(list(), LetterSequence::new("UAI").unwrap());
        match s.apply_choice(Choice::Left) {
            Ok(SessionResult::InProgress(s)) => assert!(PoolsDerivableInvariant::holds(&s)),
            other => panic!("Expected in-progress session, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_pools_violate() {
        let mut s = SessionInProgress::start(list(), LetterSequence::new("UAI").unwrap());
        s.history.push(Choice::Left);
        // Pools still hold the full list from step 0.
        assert_eq!(s.pools, Pools::full(s.word_list.words()));
        assert!(!PoolsDerivableInvariant::holds(&s));
    }
}
