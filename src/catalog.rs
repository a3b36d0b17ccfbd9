//! Built-in word lists and letter sequences, looked up by id.

use std::collections::BTreeMap;
use std::path::Path;

use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::ConfigError;
use crate::engine::{LetterSequence, WordList};

/// Id of the ten-word list used in the standard routine.
pub const DEFAULT_WORD_LIST_ID: &str = "default";

/// Id of the letter sequence matched to the default word list.
pub const DEFAULT_SEQUENCE_ID: &str = "custom";

const DEFAULT_WORDS: [&str; 10] = [
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

const MONTHS_AND_STAR_SIGNS: [&str; 24] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

const BUILTIN_SEQUENCES: [(&str, &str, &str); 5] = [
    (DEFAULT_SEQUENCE_ID, "Default Words (10)", "NTRLCSEUAI"),
    ("full-alphabet", "Full Alphabet (26)", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    ("seatjk", "SEATJK (6)", "SEATJK"),
    ("vowels-only", "Vowels Only (5)", "AEIOU"),
    ("most-frequent", "Most Frequent (26)", "ETAOINSHRDLUCMFWYPVBGKQJXZ"),
];

/// Catalog lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CatalogError {
    /// No word list with this id.
    #[display("Unknown word list '{}'", _0)]
    UnknownWordList(String),
    /// No letter sequence with this id.
    #[display("Unknown letter sequence '{}'", _0)]
    UnknownSequence(String),
    /// A word list with this id is already registered.
    #[display("Word list '{}' already exists", _0)]
    DuplicateWordList(String),
}

impl std::error::Error for CatalogError {}

/// A letter sequence with an id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct NamedSequence {
    /// Unique identifier.
    id: String,
    /// Display name.
    name: String,
    /// The letters.
    letters: LetterSequence,
}

/// On-disk format for extra word lists.
#[derive(Debug, Deserialize)]
struct WordListFile {
    #[serde(default)]
    lists: Vec<WordList>,
}

/// Word lists and letter sequences keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    word_lists: BTreeMap<String, WordList>,
    sequences: BTreeMap<String, NamedSequence>,
}

impl Catalog {
    /// Creates a catalog holding the built-in lists and sequences.
    #[instrument]
    pub fn builtin() -> Self {
        let mut word_lists = BTreeMap::new();
        for list in [
            WordList::new(DEFAULT_WORD_LIST_ID, "Default Words", DEFAULT_WORDS),
            WordList::new("months-starsigns", "Months & Star Signs", MONTHS_AND_STAR_SIGNS),
        ] {
            word_lists.insert(list.id().clone(), list);
        }

        let sequences = BUILTIN_SEQUENCES
            .iter()
            .filter_map(|(id, name, letters)| {
                LetterSequence::new(letters)
                    .ok()
                    .map(|seq| (id.to_string(), NamedSequence::new(id.to_string(), name.to_string(), seq)))
            })
            .collect();

        debug!("Built-in catalog ready");
        Self {
            word_lists,
            sequences,
        }
    }

    /// Registers an extra word list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateWordList`] if the id is taken.
    #[instrument(skip(self, list), fields(list = %list.id()))]
    pub fn insert_word_list(&mut self, list: WordList) -> Result<(), CatalogError> {
        if self.word_lists.contains_key(list.id()) {
            warn!("Duplicate word list id");
            return Err(CatalogError::DuplicateWordList(list.id().clone()));
        }
        self.word_lists.insert(list.id().clone(), list);
        Ok(())
    }

    /// Loads extra word lists from a TOML file of `[[lists]]` tables.
    ///
    /// Lists whose id is already taken are skipped with a warning.
    /// Returns the number of lists added.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_word_lists(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read word lists: {}", e)))?;
        let file: WordListFile = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse word lists: {}", e)))?;

        let mut added = 0;
        for list in file.lists {
            match self.insert_word_list(list) {
                Ok(()) => added += 1,
                Err(e) => warn!(error = %e, "Skipping word list"),
            }
        }

        info!(added, "Loaded word lists");
        Ok(added)
    }

    /// Looks up a word list by id.
    #[instrument(skip(self))]
    pub fn word_list(&self, id: &str) -> Result<&WordList, CatalogError> {
        self.word_lists
            .get(id)
            .ok_or_else(|| CatalogError::UnknownWordList(id.to_string()))
    }

    /// Looks up a letter sequence by id.
    #[instrument(skip(self))]
    pub fn sequence(&self, id: &str) -> Result<&NamedSequence, CatalogError> {
        self.sequences
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSequence(id.to_string()))
    }

    /// All word lists, ordered by id.
    pub fn word_lists(&self) -> impl Iterator<Item = &WordList> {
        self.word_lists.values()
    }

    /// All letter sequences, ordered by id.
    pub fn sequences(&self) -> impl Iterator<Item = &NamedSequence> {
        self.sequences.values()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_default_pair() {
        let catalog = Catalog::builtin();
        let list = catalog.word_list(DEFAULT_WORD_LIST_ID).unwrap();
        let seq = catalog.sequence(DEFAULT_SEQUENCE_ID).unwrap();
        assert_eq!(list.len(), 10);
        assert_eq!(seq.letters().to_string(), "NTRLCSEUAI");
    }

    #[test]
    fn test_default_sequence_matches_initials() {
        let catalog = Catalog::builtin();
        let initials: String = catalog
            .word_list(DEFAULT_WORD_LIST_ID)
            .unwrap()
            .words()
            .iter()
            .filter_map(|w| w.chars().next())
            .collect();
        assert_eq!(initials, "NTRLCSEUAI");
    }

    #[test]
    fn test_all_builtin_sequences_present() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.sequences().map(|s| s.id().as_str()).collect();
        assert_eq!(
            ids,
            ["custom", "full-alphabet", "most-frequent", "seatjk", "vowels-only"]
        );
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.word_list("nope").unwrap_err(),
            CatalogError::UnknownWordList("nope".to_string())
        );
        assert!(matches!(
            catalog.sequence("nope"),
            Err(CatalogError::UnknownSequence(_))
        ));
    }

    #[test]
    fn test_duplicate_list_rejected() {
        let mut catalog = Catalog::builtin();
        let dup = WordList::new(DEFAULT_WORD_LIST_ID, "Again", ["x"]);
        assert!(matches!(
            catalog.insert_word_list(dup),
            Err(CatalogError::DuplicateWordList(_))
        ));
        assert_eq!(catalog.word_list(DEFAULT_WORD_LIST_ID).unwrap().len(), 10);
    }
}
