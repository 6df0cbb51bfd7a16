//! Access-rule error types.

use thiserror::Error;

/// Errors raised while building access rules.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A positional insert targeted an index past the end of the registry.
    #[error("index {index} out of range for registry of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A rule was constructed with an unusable matcher or attribute set.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
