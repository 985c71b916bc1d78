//! Supported languages

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// A locale with a built-in lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Spanish (`es`)
    #[default]
    Spanish,
}

impl Language {
    /// Canonical language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
        }
    }
}

impl FromStr for Language {
    type Err = ApiError;

    /// Accepts any tag the core resolves (`es`, `es-MX`, `spa`, `spanish`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match cifra_core::canonical_code(s) {
            Some("es") => Ok(Language::Spanish),
            _ => Err(ApiError::InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_tags() {
        for tag in ["es", "ES", "es-es", "es_MX", "spa", "Spanish"] {
            assert_eq!(tag.parse::<Language>().unwrap(), Language::Spanish, "{tag}");
        }
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(ApiError::InvalidLanguage(tag)) if tag == "fr"
        ));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_code_and_name() {
        assert_eq!(Language::default().code(), "es");
        assert_eq!(Language::Spanish.name(), "Spanish");
        assert_eq!(Language::Spanish.to_string(), "es");
    }
}
