//! Binary Words library - dual-interpretation word reading
//!
//! A presenter "reads" a spectator's word through a run of Left/Right
//! choices, one per letter of a letter sequence. Every choice history is
//! read two ways at once, so two candidate pools stay plausible until the
//! reveal.
//!
//! # Architecture
//!
//! - **Engine**: the pure pool filter plus a typestate session machine
//! - **Catalog**: built-in word lists and letter sequences by id
//! - **Preferences**: persisted user settings (TOML)
//! - **App**: session, preferences, and perform mode together
//! - **Spectators**: two choice streams folded into one session
//!
//! # Example
//!
//! ```
//! use binary_words::{Choice, FilterSession, LetterSequence, WordList};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = WordList::new("demo", "Demo", ["Necessary", "Toothbrush", "Remember"]);
//! let mut session = FilterSession::with_word_list(list, LetterSequence::new("NT")?);
//!
//! let snapshot = session.apply_choice(Choice::Left)?;
//! assert_eq!(snapshot.left_pool(), &["Necessary"]);
//! assert_eq!(snapshot.right_pool(), &["Toothbrush", "Remember"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod catalog;
mod console;
mod engine;
mod export;
mod preferences;
mod spectator;

// Crate-level exports - Engine
pub use engine::{
    CUSTOM_SEQUENCE_MAX, CUSTOM_SEQUENCE_MIN, Choice, ChoiceContract, Contract, CurrentLetter,
    FilterSession, HistoryExtended, LetterAvailable, LetterSequence, Pattern, Pools, PoolsShrink,
    SequenceError, SessionComplete, SessionError, SessionIdle, SessionInProgress, SessionResult,
    SessionStatus, SessionView, Snapshot, WordList, compute_pools, word_matches,
};

// Crate-level exports - Invariants
pub use engine::invariants;

// Crate-level exports - Catalog
pub use catalog::{Catalog, CatalogError, DEFAULT_SEQUENCE_ID, DEFAULT_WORD_LIST_ID, NamedSequence};

// Crate-level exports - Preferences
pub use preferences::{ConfigError, ExportSettings, Preferences, USER_SEQUENCE_ID};

// Crate-level exports - Application state
pub use app::App;

// Crate-level exports - Spectators
pub use spectator::{Spectator, SpectatorRound};

// Crate-level exports - Export
pub use export::{ExportError, SessionExport, export_filename, export_session};

// Crate-level exports - Console
pub use console::{PLAY_HELP, PlayInput, SPECTATOR_HELP, SpectatorInput, render_round, render_snapshot};
