//! Dual-interpretation filtering.
//!
//! A choice history is read two ways at once. Under the Left-pattern a
//! `Left` means "the word contains this letter" and a `Right` means "it does
//! not"; the Right-pattern reads every choice the other way round. Both
//! pools are always derived from scratch from the full word list.

use super::action::SessionError;
use super::types::{Choice, LetterSequence, Pools};
use tracing::{debug, instrument, warn};

/// One of the two readings of a choice history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `Left` = contains the letter, `Right` = lacks it.
    Left,
    /// `Right` = contains the letter, `Left` = lacks it.
    Right,
}

impl Pattern {
    /// Returns true if, under this reading, `choice` claims the word contains
    /// the probed letter.
    pub fn expects_letter(self, choice: Choice) -> bool {
        matches!(
            (self, choice),
            (Pattern::Left, Choice::Left) | (Pattern::Right, Choice::Right)
        )
    }

    /// Checks one upper-cased word against every probe/choice pair.
    fn admits(self, upper_word: &str, probes: &[String], history: &[Choice]) -> bool {
        probes
            .iter()
            .zip(history)
            .all(|(probe, choice)| upper_word.contains(probe.as_str()) == self.expects_letter(*choice))
    }
}

/// Checks whether a single word matches `pattern` after `history`.
///
/// # Errors
///
/// Returns [`SessionError::InvalidArgument`] if the history is longer than
/// the letter sequence.
#[instrument(skip(letters))]
pub fn word_matches(
    word: &str,
    pattern: Pattern,
    history: &[Choice],
    letters: &LetterSequence,
) -> Result<bool, SessionError> {
    let probes = probes_for(history, letters)?;
    Ok(pattern.admits(&word.to_uppercase(), &probes, history))
}

/// Splits `words` into the Left-pattern and Right-pattern pools.
///
/// Output order follows input order. With an empty history both pools are
/// the full list. Once at least one choice is made the pools are disjoint,
/// since the two readings disagree on the very first letter.
///
/// # Errors
///
/// Returns [`SessionError::InvalidArgument`] if the history is longer than
/// the letter sequence.
#[instrument(skip(words, letters), fields(words = words.len(), steps = history.len()))]
pub fn compute_pools<S: AsRef<str>>(
    words: &[S],
    history: &[Choice],
    letters: &LetterSequence,
) -> Result<Pools, SessionError> {
    let probes = probes_for(history, letters)?;

    let mut pools = Pools::default();
    for word in words {
        let word = word.as_ref();
        let upper = word.to_uppercase();

        if Pattern::Left.admits(&upper, &probes, history) {
            pools.push_left(word);
        }
        if Pattern::Right.admits(&upper, &probes, history) {
            pools.push_right(word);
        }
    }

    debug!(
        left = pools.left().len(),
        right = pools.right().len(),
        "Pools recomputed"
    );
    Ok(pools)
}

/// Upper-cased probe strings for the first `history.len()` letters.
fn probes_for(history: &[Choice], letters: &LetterSequence) -> Result<Vec<String>, SessionError> {
    if history.len() > letters.len() {
        warn!(
            history = history.len(),
            letters = letters.len(),
            "Choice history longer than letter sequence"
        );
        return Err(SessionError::InvalidArgument(format!(
            "{} choices but only {} letters",
            history.len(),
            letters.len()
        )));
    }

    Ok((0..history.len())
        .filter_map(|step| letters.probe(step))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::{Left as L, Right as R};

    const WORDS: [&str; 10] = [
        "Necessary",
        "Toothbrush",
        "Remember",
        "Loveable",
        "Clementine",
        "Swingset",
        "Elephant",
        "Umbrella",
        "Antidote",
        "Impression",
    ];

    fn letters() -> LetterSequence {
        LetterSequence::new("NTRLCSEUAI").unwrap()
    }

    #[test]
    fn test_empty_history_keeps_everything() {
        let pools = compute_pools(&WORDS, &[], &letters()).unwrap();
        assert_eq!(pools.left(), &WORDS);
        assert_eq!(pools.right(), &WORDS);
    }

    #[test]
    fn test_first_left_splits_on_n() {
        let pools = compute_pools(&WORDS, &[L], &letters()).unwrap();
        assert_eq!(
            pools.left(),
            &["Necessary", "Clementine", "Swingset", "Elephant", "Antidote", "Impression"]
        );
        assert_eq!(
            pools.right(),
            &["Toothbrush", "Remember", "Loveable", "Umbrella"]
        );
    }

    #[test]
    fn test_left_then_right() {
        let pools = compute_pools(&WORDS, &[L, R], &letters()).unwrap();
        assert_eq!(pools.left(), &["Necessary", "Impression"]);
        assert_eq!(pools.right(), &["Toothbrush"]);
    }

    #[test]
    fn test_case_insensitive_letters_and_words() {
        let words = ["apple", "BANANA", "Cherry"];
        let seq = LetterSequence::new("a").unwrap();
        let pools = compute_pools(&words, &[L], &seq).unwrap();
        assert_eq!(pools.left(), &["apple", "BANANA"]);
        assert_eq!(pools.right(), &["Cherry"]);
    }

    #[test]
    fn test_word_can_fall_in_neither_pool() {
        // "ab": Left-pattern needs A and no B; Right-pattern needs no A and B.
        let words = ["ab"];
        let seq = LetterSequence::new("AB").unwrap();
        let pools = compute_pools(&words, &[L, R], &seq).unwrap();
        assert!(pools.left().is_empty());
        assert!(pools.right().is_empty());
    }

    #[test]
    fn test_duplicates_are_not_introduced() {
        let words = ["Necessary", "Necessary"];
        let pools = compute_pools(&words, &[L], &letters()).unwrap();
        assert_eq!(pools.left().len(), 2);
        assert!(pools.right().is_empty());
    }

    #[test]
    fn test_empty_word_list() {
        let words: [&str; 0] = [];
        let pools = compute_pools(&words, &[L, R, L], &letters()).unwrap();
        assert!(pools.left().is_empty());
        assert!(pools.right().is_empty());
    }

    #[test]
    fn test_history_longer_than_letters_rejected() {
        let seq = LetterSequence::new("N").unwrap();
        let err = compute_pools(&WORDS, &[L, R], &seq).unwrap_err();
        assert!(matches!(err, SessionError::InvalidArgument(_)));
    }

    #[test]
    fn test_word_matches_agrees_with_pools() {
        let history = [R, L, R];
        let pools = compute_pools(&WORDS, &history, &letters()).unwrap();
        for word in WORDS {
            let left = word_matches(word, Pattern::Left, &history, &letters()).unwrap();
            let right = word_matches(word, Pattern::Right, &history, &letters()).unwrap();
            assert_eq!(left, pools.left().iter().any(|w| w == word));
            assert_eq!(right, pools.right().iter().any(|w| w == word));
        }
    }
}
