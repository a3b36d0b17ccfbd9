//! Core domain types for the binary word reading.

use super::action::{SequenceError, SessionError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Shortest custom letter sequence accepted from a user.
pub const CUSTOM_SEQUENCE_MIN: usize = 3;

/// Longest custom letter sequence accepted from a user.
pub const CUSTOM_SEQUENCE_MAX: usize = 50;

/// A single binary decision, one per letter in the active sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Choice {
    /// Left side.
    #[serde(rename = "L")]
    #[strum(to_string = "L", serialize = "left")]
    Left,
    /// Right side.
    #[serde(rename = "R")]
    #[strum(to_string = "R", serialize = "right")]
    Right,
}

impl Choice {
    /// Parses a compact choice string such as `"LRRL"`.
    ///
    /// Whitespace and commas are ignored; any other character that is not
    /// `L` or `R` (either case) is rejected.
    #[instrument]
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, SessionError> {
        input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                Choice::from_str(c.encode_utf8(&mut [0; 4])).map_err(|_| {
                    SessionError::InvalidArgument(format!("'{}' is not a choice (use L or R)", c))
                })
            })
            .collect()
    }

    /// Formats a history as a compact string such as `"LRRL"`.
    pub fn format_sequence(history: &[Self]) -> String {
        history.iter().map(|c| c.to_string()).collect()
    }
}

/// A named list of candidate words.
///
/// Words keep their original spelling; all comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WordList {
    /// Unique identifier used by catalogs and preferences.
    id: String,
    /// Display name.
    name: String,
    /// The words, in presentation order.
    words: Vec<String>,
}

impl WordList {
    /// Creates a new word list.
    #[instrument(skip(id, name, words), fields(id = %id.as_ref()))]
    pub fn new<I, W>(id: impl AsRef<str>, name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            id: id.as_ref().to_string(),
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Ordered letters probed one per step.
///
/// Always holds at least one letter. Letters are compared case-insensitively
/// and displayed in upper case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterSequence {
    letters: Vec<char>,
}

impl LetterSequence {
    /// Creates a sequence from any non-empty string.
    ///
    /// Only emptiness is rejected here; use [`LetterSequence::custom`] for
    /// user-entered sequences.
    #[instrument]
    pub fn new(sequence: &str) -> Result<Self, SequenceError> {
        let letters: Vec<char> = sequence.chars().collect();
        if letters.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { letters })
    }

    /// Validates a user-entered sequence.
    ///
    /// Surrounding whitespace is trimmed. Each remaining character must be
    /// alphabetic with a single-character upper case; the upper-cased
    /// result must hold 3–50 letters.
    #[instrument]
    pub fn custom(input: &str) -> Result<Self, SequenceError> {
        let mut letters = Vec::new();
        for c in input.trim().chars() {
            if !c.is_alphabetic() {
                return Err(SequenceError::NonAlphabetic(c));
            }
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => letters.push(u),
                _ => return Err(SequenceError::NonAlphabetic(c)),
            }
        }

        let len = letters.len();
        if len < CUSTOM_SEQUENCE_MIN {
            return Err(SequenceError::TooShort {
                len,
                min: CUSTOM_SEQUENCE_MIN,
            });
        }
        if len > CUSTOM_SEQUENCE_MAX {
            return Err(SequenceError::TooLong {
                len,
                max: CUSTOM_SEQUENCE_MAX,
            });
        }

        Ok(Self { letters })
    }

    /// Returns the letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters, which is also the number of choices in a session.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Never true for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter probed at `step`, if any.
    pub fn get(&self, step: usize) -> Option<char> {
        self.letters.get(step).copied()
    }

    /// Returns the letter at `step` as an upper-case probe string.
    pub(crate) fn probe(&self, step: usize) -> Option<String> {
        self.get(step).map(|c| c.to_uppercase().to_string())
    }
}

impl Default for LetterSequence {
    /// The ten letters matching the initials of the default word list.
    fn default() -> Self {
        Self {
            letters: "NTRLCSEUAI".chars().collect(),
        }
    }
}

impl std::fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.to_uppercase())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for LetterSequence {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LetterSequence> for String {
    fn from(sequence: LetterSequence) -> Self {
        sequence.letters.into_iter().collect()
    }
}

/// The two candidate pools derived from a choice history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Pools {
    /// Words matching the Left-pattern reading.
    left: Vec<String>,
    /// Words matching the Right-pattern reading.
    right: Vec<String>,
}

impl Pools {
    /// Both pools equal to the full word list.
    pub fn full(words: &[String]) -> Self {
        Self {
            left: words.to_vec(),
            right: words.to_vec(),
        }
    }

    pub(super) fn push_left(&mut self, word: &str) {
        self.left.push(word.to_string());
    }

    pub(super) fn push_right(&mut self, word: &str) {
        self.right.push(word.to_string());
    }

    /// Consumes the pools, returning `(left, right)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.left, self.right)
    }
}

/// The letter a caller should probe next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentLetter {
    /// The next letter to ask about.
    Letter(char),
    /// Every letter has been used.
    Done,
}

impl CurrentLetter {
    /// Returns the letter, if one remains.
    pub fn letter(self) -> Option<char> {
        match self {
            CurrentLetter::Letter(c) => Some(c),
            CurrentLetter::Done => None,
        }
    }
}

impl std::fmt::Display for CurrentLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrentLetter::Letter(c) => write!(f, "{}", c.to_uppercase()),
            CurrentLetter::Done => write!(f, "✓"),
        }
    }
}
