//! Tokenizer and normalizer
//!
//! Lowercases the input, keeps diacritics, folds spelled meridiem markers
//! (`p.m.` -> `pm`) and splits into word and digit-group tokens. `3/4` and
//! `10:45` stay atomic; every other punctuation mark separates tokens and is
//! dropped.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::Token;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();
static MERIDIEM_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]+[/:][0-9]+|[\p{L}\p{N}]+").expect("token pattern is valid")
    })
}

fn meridiem_pattern() -> &'static Regex {
    MERIDIEM_PATTERN
        .get_or_init(|| Regex::new(r"\b([ap])\.\s?m\b\.?").expect("meridiem pattern is valid"))
}

/// Splits text into position-tracked tokens
pub struct Tokenizer;

impl Tokenizer {
    /// Lowercase and fold dotted meridiem markers
    pub fn normalize_text(text: &str) -> String {
        let lowered = text.to_lowercase();
        meridiem_pattern()
            .replace_all(&lowered, "${1}m")
            .into_owned()
    }

    /// Tokenize raw text
    pub fn tokenize(text: &str) -> Vec<Token> {
        let normalized = Self::normalize_text(text);
        token_pattern()
            .find_iter(&normalized)
            .enumerate()
            .map(|(index, m)| Token::new(m.as_str(), index, m.start()))
            .collect()
    }

    /// Drop every token found in `articles`, renumbering the rest
    pub fn strip_articles(tokens: Vec<Token>, articles: &HashSet<String>) -> Vec<Token> {
        Self::reindex(
            tokens
                .into_iter()
                .filter(|token| !articles.contains(&token.text)),
        )
    }

    /// Apply a word rewrite to every token, keeping positions
    pub fn map_words<F>(tokens: Vec<Token>, mut rewrite: F) -> Vec<Token>
    where
        F: FnMut(&str) -> Option<String>,
    {
        tokens
            .into_iter()
            .map(|mut token| {
                if let Some(text) = rewrite(&token.text) {
                    token.text = text;
                }
                token
            })
            .collect()
    }

    fn reindex(tokens: impl Iterator<Item = Token>) -> Vec<Token> {
        tokens
            .enumerate()
            .map(|(index, mut token)| {
                token.index = index;
                token
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_lowercases_and_keeps_accents() {
        let tokens = Tokenizer::tokenize("El Miércoles, MAÑANA!");
        assert_eq!(texts(&tokens), vec!["el", "miércoles", "mañana"]);
    }

    #[test]
    fn test_digit_groups_stay_atomic() {
        let tokens = Tokenizer::tokenize("1 y 3/4 copas a las 10:45.");
        assert_eq!(
            texts(&tokens),
            vec!["1", "y", "3/4", "copas", "a", "las", "10:45"]
        );
    }

    #[test]
    fn test_positions_track_the_normalized_text() {
        let tokens = Tokenizer::tokenize("hoy  a las 8");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 5);
        assert_eq!(tokens[3].index, 3);
    }

    #[test]
    fn test_meridiem_markers_are_folded() {
        assert_eq!(
            texts(&Tokenizer::tokenize("a las 3:00 p.m.")),
            vec!["a", "las", "3:00", "pm"]
        );
        assert_eq!(
            texts(&Tokenizer::tokenize("a las 9 a. m.")),
            vec!["a", "las", "9", "am"]
        );
    }

    #[test]
    fn test_hyphens_split_words() {
        let tokens = Tokenizer::tokenize("veinti-dos fin_de_semana");
        assert_eq!(texts(&tokens), vec!["veinti", "dos", "fin", "de", "semana"]);
    }

    #[test]
    fn test_strip_articles_keeps_indefinite() {
        let articles: HashSet<String> = ["el", "la", "los", "las"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tokens = Tokenizer::strip_articles(
            Tokenizer::tokenize("la prueba tiene una copa y los vasos"),
            &articles,
        );
        assert_eq!(
            texts(&tokens),
            vec!["prueba", "tiene", "una", "copa", "y", "vasos"]
        );
        assert_eq!(tokens[5].index, 5);
    }
}
