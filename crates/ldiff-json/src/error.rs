//! Error types for the structural diff crate.

use std::fmt;

/// Which of the two payloads an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    First,
    Second,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Errors that can occur during structural diff operations.
#[derive(Debug, thiserror::Error)]
pub enum JsonDiffError {
    /// A payload could not be decoded as JSON.
    #[error("invalid JSON in {input} input: {source}")]
    Decode {
        input: Input,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for structural diff results.
pub type JsonResult<T> = Result<T, JsonDiffError>;
