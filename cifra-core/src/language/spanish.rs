//! Spanish implementation of [`LanguageParser`]

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::language::{config::LexiconConfig, interface::LanguageParser, runtime::Lexicon};
use crate::resolve::{FractionResolver, GenderResolver, NumeralResolver, TemporalResolver};
use crate::tokenizer::Tokenizer;
use crate::types::{DateTimeMatch, Extraction, Gender, NumberMatch};

/// Table-driven Spanish parser
#[derive(Debug, Clone)]
pub struct SpanishParser {
    lexicon: Arc<Lexicon>,
}

impl SpanishParser {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Build from a TOML lexicon document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LexiconConfig =
            toml::from_str(source).map_err(|e| CoreError::LexiconParse {
                code: "custom".to_string(),
                reason: e.to_string(),
            })?;
        let lexicon = Lexicon::from_config(&config).map_err(CoreError::LexiconInvalid)?;
        debug!(code = lexicon.code(), "loaded custom lexicon");
        Ok(Self::new(Arc::new(lexicon)))
    }

    /// Build from a TOML lexicon file
    pub fn load_lexicon_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source).map_err(|e| match e {
            CoreError::LexiconParse { reason, .. } => CoreError::LexiconParse {
                code: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    fn numerals(&self) -> NumeralResolver<'_> {
        NumeralResolver::new(self.lexicon.numerals())
    }

    fn fractions(&self) -> FractionResolver<'_> {
        FractionResolver::new(self.numerals(), self.lexicon.fractions())
    }
}

impl LanguageParser for SpanishParser {
    fn code(&self) -> &str {
        self.lexicon.code()
    }

    fn extract_number(&self, text: &str, denominators: Option<&[u64]>) -> Option<NumberMatch> {
        let tokens = Tokenizer::tokenize(text);
        let numerals = self.numerals();
        let fractions = self.fractions().with_allowed(denominators);

        let found = (0..tokens.len()).find_map(|i| {
            fractions
                .mixed_at(&tokens, i)
                .or_else(|| fractions.fraction_at(&tokens, i))
                .or_else(|| numerals.match_cardinal(&tokens, i))
                .or_else(|| numerals.match_ordinal(&tokens, i))
        });
        debug!(text, value = ?found.map(|m| m.value()), "extract number");
        found
    }

    fn normalize(&self, text: &str, remove_articles: bool) -> String {
        let mut tokens = Tokenizer::tokenize(text);
        if remove_articles {
            tokens = Tokenizer::strip_articles(tokens, self.lexicon.articles());
        }

        let numerals = self.numerals();
        let mut words = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match numerals.resolve_at(&tokens, i) {
                Some((value, end)) => {
                    words.push(value.to_string());
                    i = end;
                }
                None => {
                    words.push(tokens[i].text.clone());
                    i += 1;
                }
            }
        }
        words.join(" ")
    }

    fn extract_datetime(&self, text: &str, anchor: NaiveDateTime) -> Extraction<DateTimeMatch> {
        let temporal = self.lexicon.temporal();
        let tokens = Tokenizer::map_words(Tokenizer::tokenize(text), |w| temporal.fold_plural(w));

        let resolver = TemporalResolver::new(temporal, self.numerals(), self.fractions());
        resolver.resolve(&tokens, anchor)
    }

    fn gender(&self, word: &str, context: Option<&str>) -> Option<Gender> {
        GenderResolver::new(self.lexicon.gender()).resolve(word, context)
    }
}
