//! Ordering invariant: each pool is a subsequence of the word list.

use super::super::SessionView;
use super::Invariant;

/// Invariant: every pool keeps source order and only holds list words.
pub struct PoolsOrderedInvariant;

impl PoolsOrderedInvariant {
    fn is_subsequence(pool: &[String], words: &[String]) -> bool {
        let mut source = words.iter();
        pool.iter().all(|word| source.any(|candidate| candidate == word))
    }
}

impl<S: SessionView> Invariant<S> for PoolsOrderedInvariant {
    fn holds(session: &S) -> bool {
        let words = session.word_list().words();
        let pools = session.pools();
        Self::is_subsequence(pools.left(), words) && Self::is_subsequence(pools.right(), words)
    }

    fn description() -> &'static str {
        "Pools are ordered subsequences of the word list"
    }
}
