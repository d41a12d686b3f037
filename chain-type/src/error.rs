//! Unified error types for chain identifiers and their configuration.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Text did not exactly match any canonical chain name.
    #[error("invalid chain type: {0:?}")]
    InvalidChainType(String),

    /// Numeric code is outside the defined chain range.
    #[error("invalid chain code: {0}")]
    InvalidChainCode(u8),

    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// JSON output could not be encoded.
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::Config`] from any displayable message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Builds an [`Error::Config`] that carries the rendered source error.
    #[must_use]
    pub fn config_with(context: impl std::fmt::Display, source: impl std::fmt::Display) -> Self {
        Self::Config(format!("{context}: {source}"))
    }
}
