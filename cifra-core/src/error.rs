//! Core error types
//!
//! Extraction itself never fails: a phrase that cannot be interpreted is a
//! negative result, not an error. Errors only come from building lexicons.

use thiserror::Error;

/// Lexicon loading and language lookup errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// The TOML document could not be parsed
    #[error("failed to parse {code} lexicon: {reason}")]
    LexiconParse {
        /// Language code or file the lexicon was read for
        code: String,
        /// Parser message
        reason: String,
    },

    /// The lexicon parsed but failed validation
    #[error("invalid lexicon: {0}")]
    LexiconInvalid(String),

    /// No lexicon is registered for the language code
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Reading an external lexicon file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
