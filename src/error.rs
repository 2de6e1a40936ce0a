//! Error types for janitor.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JanitorError>;

#[derive(Error, Debug)]
pub enum JanitorError {
    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("invalid timestamp {input:?}: {source} (expected \"now\" or RFC 3339, e.g. 2023-01-01T00:00:00Z)")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid ignore pattern {input:?}: {source}")]
    InvalidPattern {
        input: String,
        #[source]
        source: regex::Error,
    },

    #[error("no target space: {0}")]
    NoTarget(String),

    #[error("fetching apps failed: {0}")]
    Fetch(String),

    #[error("decoding apps payload failed: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl JanitorError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument(_) => "missing_argument",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::NoTarget(_) => "no_target",
            Self::Fetch(_) => "fetch_failed",
            Self::Decode(_) => "decode_failed",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}
