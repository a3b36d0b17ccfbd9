//! Error types for session transitions and sequence validation.
//!
//! Every failure is local and recoverable: a rejected operation leaves the
//! session exactly as it was before the call.

/// Error that can occur when validating or applying a session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The operation is not allowed in the current phase
    /// (for example a choice after the last letter).
    #[display("Invalid state: {}", _0)]
    InvalidState(String),

    /// An argument was rejected before any state was touched.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}

/// Why a letter sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SequenceError {
    /// No letters at all.
    #[display("Letter sequence is empty")]
    Empty,

    /// Fewer letters than a custom sequence allows.
    #[display("Letter sequence has {len} letters, need at least {min}")]
    TooShort {
        /// Letters supplied.
        len: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// More letters than a custom sequence allows.
    #[display("Letter sequence has {len} letters, at most {max} allowed")]
    TooLong {
        /// Letters supplied.
        len: usize,
        /// Maximum accepted.
        max: usize,
    },

    /// A character that is not a letter.
    #[display("'{}' is not a letter", _0)]
    NonAlphabetic(char),
}

impl std::error::Error for SequenceError {}

impl From<SequenceError> for SessionError {
    fn from(err: SequenceError) -> Self {
        SessionError::InvalidArgument(err.to_string())
    }
}
