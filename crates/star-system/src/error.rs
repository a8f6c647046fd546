//! Error types for system generation.
//!
//! Only structural failures are errors. Numeric dead ends inside the
//! pipeline (an unusable host, an empty moon band, a belt with no gap)
//! are skipped and never reach the caller.

use thiserror::Error;

/// Result alias for generation entry points
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Fatal failures of a generation call
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("no stars were produced")]
    NoStars,

    #[error("invalid star count range: min {min}, max {max}")]
    InvalidStarRange { min: usize, max: usize },

    #[error("hierarchy could not be assembled: {0}")]
    Hierarchy(String),

    #[error("invalid specification: {0}")]
    Spec(#[from] SpecError),
}

/// Problems with a [`SystemSpec`](crate::spec::SystemSpec) or its overrides
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("unknown override key `{0}`")]
    UnknownKey(String),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("failed to parse specification: {0}")]
    Parse(String),
}

impl SpecError {
    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
