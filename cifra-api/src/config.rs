//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::language::Language;

/// What `extract_datetime` returns when no temporal expression is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnmatchedPolicy {
    /// Return the anchor unchanged with the whole utterance as leftover
    #[default]
    Leftover,
    /// Return no value
    NotFound,
}

/// High-level configuration for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) remove_articles: bool,
    pub(crate) unmatched_datetime: UnmatchedPolicy,
    pub(crate) denominators: Option<Vec<u64>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Spanish,
            remove_articles: true,
            unmatched_datetime: UnmatchedPolicy::Leftover,
            denominators: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether `normalize` drops definite articles
    pub fn remove_articles(&self) -> bool {
        self.remove_articles
    }

    /// Policy for utterances with no temporal expression
    pub fn unmatched_datetime(&self) -> UnmatchedPolicy {
        self.unmatched_datetime
    }

    /// Allowed fraction denominators, `None` for all
    pub fn denominators(&self) -> Option<&[u64]> {
        self.denominators.as_deref()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language from a tag such as `es` or `es-MX`
    pub fn language(mut self, tag: &str) -> Result<Self> {
        self.config.language = tag.parse()?;
        Ok(self)
    }

    /// Toggle definite-article removal in `normalize`
    pub fn remove_articles(mut self, remove: bool) -> Self {
        self.config.remove_articles = remove;
        self
    }

    /// Set the policy for utterances with no temporal expression
    pub fn unmatched_datetime(mut self, policy: UnmatchedPolicy) -> Self {
        self.config.unmatched_datetime = policy;
        self
    }

    /// Restrict word fractions to the given denominators
    pub fn denominators(mut self, denominators: impl Into<Vec<u64>>) -> Self {
        self.config.denominators = Some(denominators.into());
        self
    }

    /// Build the configuration
    ///
    /// Denominators must lie between 2 and the largest one the language's
    /// lexicon names.
    pub fn build(self) -> Result<Config> {
        if let Some(denominators) = &self.config.denominators {
            let max = cifra_core::get_lexicon(self.config.language.code())?.max_denominator();
            if let Some(bad) = denominators.iter().find(|d| !(2..=max).contains(*d)) {
                return Err(ApiError::Config(format!(
                    "denominator {bad} outside 2..={max}"
                )));
            }
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language(), Language::Spanish);
        assert!(config.remove_articles());
        assert_eq!(config.unmatched_datetime(), UnmatchedPolicy::Leftover);
        assert_eq!(config.denominators(), None);
    }

    #[test]
    fn test_denominator_range() {
        assert!(Config::builder().denominators([2, 4, 30]).build().is_ok());
        assert!(matches!(
            Config::builder().denominators([4, 31]).build(),
            Err(ApiError::Config(_))
        ));
        assert!(Config::builder().denominators([1]).build().is_err());
    }

    #[test]
    fn test_invalid_language() {
        assert!(matches!(
            Config::builder().language("de"),
            Err(ApiError::InvalidLanguage(_))
        ));
    }
}
