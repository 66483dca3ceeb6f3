// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the vector table or a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed vector snapshot {path}: {source}")]
    Bincode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("malformed line {line} in {path}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("vector for '{word}' has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("{0} contains no usable entries")]
    Empty(PathBuf),
}

impl LoadError {
    /// Only I/O failures are worth retrying; bad data stays bad.
    pub fn is_transient(&self) -> bool {
        matches!(self, LoadError::Io { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("zero-magnitude vector")]
    DegenerateVector,
}

/// Bad input from a player or a caller. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a recognized word")]
    UnknownWord(String),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date {0} is before the first daily word")]
    DateBeforeEpoch(chrono::NaiveDate),

    #[error("the session for {0} is already finished")]
    SessionFinished(chrono::NaiveDate),

    #[error("no hints left to reveal")]
    NoHintsLeft,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
