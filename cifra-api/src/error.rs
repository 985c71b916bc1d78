//! API error types

use cifra_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The language tag does not name a supported locale
    #[error("unsupported language: {0}")]
    InvalidLanguage(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Lexicon loading error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
