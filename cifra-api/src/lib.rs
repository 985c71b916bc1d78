//! Public API for Cifra number and date-time extraction
//!
//! This crate provides a stable interface over the Spanish extraction core:
//! a configurable [`Extractor`] plus one free function per operation for
//! one-off calls.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let value = cifra_api::extractnumber("tres cuartos de copa", "es", None).unwrap();
//! assert_eq!(value.map(|n| n.value), Some(0.75));
//!
//! let anchor = NaiveDate::from_ymd_opt(2017, 6, 27)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let out = cifra_api::extract_datetime("3 diciembre", Some(anchor), "es")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(out.datetime.to_string(), "2017-12-03 00:00:00");
//! assert_eq!(out.leftover, "");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod language;

use std::sync::Arc;

use chrono::NaiveDateTime;
use cifra_core::LanguageParser;
use tracing::debug;

// Re-export key types
pub use cifra_core::{Gender, NumberKind};
pub use config::{Config, ConfigBuilder, UnmatchedPolicy};
pub use dto::{DateTimeOutput, NumberOutput};
pub use error::{ApiError, Result};
pub use language::Language;

/// Main entry point for extraction
///
/// Holds a shared handle to the locale's compiled lexicon, so creating
/// extractors is cheap after the first one.
#[derive(Clone)]
pub struct Extractor {
    parser: Arc<dyn LanguageParser>,
    config: Config,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("language", &self.parser.code())
            .field("config", &self.config)
            .finish()
    }
}

impl Extractor {
    /// Create an extractor with default configuration (Spanish)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an extractor for a language tag
    pub fn with_language(tag: &str) -> Result<Self> {
        let config = Config::builder().language(tag)?.build()?;
        Self::with_config(config)
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let parser = cifra_core::get_parser(config.language.code())?;
        Ok(Self { parser, config })
    }

    /// First number or fraction in the text
    pub fn extract_number(&self, text: &str) -> Option<NumberOutput> {
        self.parser
            .extract_number(text, self.config.denominators())
            .map(NumberOutput::from)
    }

    /// Replace numeral words with digits
    pub fn normalize(&self, text: &str) -> String {
        self.parser.normalize(text, self.config.remove_articles)
    }

    /// Resolve the temporal expressions in the text
    ///
    /// Relative phrases are resolved against `anchor`, or the local clock
    /// when it is `None`. With [`UnmatchedPolicy::Leftover`] an utterance
    /// with nothing temporal still yields the anchor and its leftover.
    pub fn extract_datetime(
        &self,
        text: &str,
        anchor: Option<NaiveDateTime>,
    ) -> Option<DateTimeOutput> {
        let anchor = anchor.unwrap_or_else(|| chrono::Local::now().naive_local());
        let extraction = self.parser.extract_datetime(text, anchor);

        match (extraction.value, self.config.unmatched_datetime) {
            (Some(m), _) => Some(DateTimeOutput::from_match(m, extraction.leftover)),
            (None, UnmatchedPolicy::Leftover) => {
                debug!(text, "no temporal expression, returning anchor");
                Some(DateTimeOutput::unmatched(anchor, extraction.leftover))
            }
            (None, UnmatchedPolicy::NotFound) => None,
        }
    }

    /// Grammatical gender of a noun, using `context` for agreement
    pub fn gender(&self, word: &str, context: Option<&str>) -> Option<Gender> {
        self.parser.gender(word, context)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured language
    pub fn language(&self) -> Language {
        self.config.language
    }
}

// Convenience functions

/// Extract the first number, optionally restricting word denominators
pub fn extractnumber(
    text: &str,
    lang: &str,
    denominators: Option<&[u64]>,
) -> Result<Option<NumberOutput>> {
    let mut builder = Config::builder().language(lang)?;
    if let Some(denominators) = denominators {
        builder = builder.denominators(denominators);
    }
    Ok(Extractor::with_config(builder.build()?)?.extract_number(text))
}

/// Replace numeral words with digits
pub fn normalize(text: &str, lang: &str, remove_articles: bool) -> Result<String> {
    let config = Config::builder()
        .language(lang)?
        .remove_articles(remove_articles)
        .build()?;
    Ok(Extractor::with_config(config)?.normalize(text))
}

/// Resolve the temporal expressions in the text with default configuration
pub fn extract_datetime(
    text: &str,
    anchor: Option<NaiveDateTime>,
    lang: &str,
) -> Result<Option<DateTimeOutput>> {
    Ok(Extractor::with_language(lang)?.extract_datetime(text, anchor))
}

/// Grammatical gender of a noun
pub fn get_gender(word: &str, context: Option<&str>, lang: &str) -> Result<Option<Gender>> {
    Ok(Extractor::with_language(lang)?.gender(word, context))
}
