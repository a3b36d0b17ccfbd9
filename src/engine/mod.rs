//! The dual-interpretation filter engine and its session state machine.

mod action;
mod contracts;
mod filter;
pub mod invariants;
mod session;
mod typestate;
mod types;

pub use action::{SequenceError, SessionError};
pub use contracts::{ChoiceContract, Contract, HistoryExtended, LetterAvailable, PoolsShrink};
pub use filter::{Pattern, compute_pools, word_matches};
pub use session::{FilterSession, SessionStatus, Snapshot};
pub use typestate::{SessionComplete, SessionIdle, SessionInProgress, SessionResult, SessionView};
pub use types::{
    CUSTOM_SEQUENCE_MAX, CUSTOM_SEQUENCE_MIN, Choice, CurrentLetter, LetterSequence, Pools,
    WordList,
};
