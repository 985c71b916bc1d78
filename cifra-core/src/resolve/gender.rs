//! Word gender heuristic

use tracing::trace;

use crate::language::tables::GenderTable;
use crate::tokenizer::Tokenizer;
use crate::types::Gender;

pub struct GenderResolver<'a> {
    table: &'a GenderTable,
}

impl<'a> GenderResolver<'a> {
    pub fn new(table: &'a GenderTable) -> Self {
        Self { table }
    }

    /// Exceptions, then agreement with the preceding word, then suffixes
    pub fn resolve(&self, word: &str, context: Option<&str>) -> Option<Gender> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return None;
        }
        let forms = singular_forms(&word);

        if let Some(gender) = forms.iter().find_map(|f| self.table.exception(f)) {
            trace!(word = %word, %gender, "gender exception");
            return Some(gender);
        }

        if let Some(gender) = context.and_then(|c| self.from_context(&word, c)) {
            trace!(word = %word, %gender, "gender from context");
            return Some(gender);
        }

        forms.iter().find_map(|f| self.table.suffix(f))
    }

    fn from_context(&self, word: &str, context: &str) -> Option<Gender> {
        let tokens = Tokenizer::tokenize(context);
        let position = tokens.iter().position(|t| t.text == word)?;
        let previous = &tokens[position.checked_sub(1)?].text;

        self.table
            .determiner(previous)
            .or_else(|| agreement(previous))
    }
}

/// Adjective agreement: "famosa" -> f, "famosos" -> m
fn agreement(word: &str) -> Option<Gender> {
    let singular = word.strip_suffix('s').unwrap_or(word);
    if singular.ends_with('a') {
        Some(Gender::Feminine)
    } else if singular.ends_with('o') {
        Some(Gender::Masculine)
    } else {
        None
    }
}

/// Candidate singulars, most stripped first ("escultores" -> "escultor",
/// "escultore", "escultores")
fn singular_forms(word: &str) -> Vec<&str> {
    let mut forms = Vec::with_capacity(3);
    if let Some(stem) = word.strip_suffix("es").filter(|s| !s.is_empty()) {
        forms.push(stem);
    }
    if let Some(stem) = word.strip_suffix('s').filter(|s| !s.is_empty()) {
        forms.push(stem);
    }
    forms.push(word);
    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;

    fn gender(word: &str, context: Option<&str>) -> Option<Gender> {
        let lexicon = get_lexicon("es").unwrap();
        GenderResolver::new(lexicon.gender()).resolve(word, context)
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(gender("mula", None), Some(Gender::Feminine));
        assert_eq!(gender("caballo", None), Some(Gender::Masculine));
        assert_eq!(gender("tigre", None), Some(Gender::Masculine));
        assert_eq!(gender("canción", None), Some(Gender::Feminine));
        assert_eq!(gender("ciudades", None), Some(Gender::Feminine));
        assert_eq!(gender("escultores", None), Some(Gender::Masculine));
    }

    #[test]
    fn test_exceptions_win() {
        assert_eq!(gender("mano", None), Some(Gender::Feminine));
        assert_eq!(gender("problemas", None), Some(Gender::Masculine));
        assert_eq!(gender("leyes", None), Some(Gender::Feminine));
        assert_eq!(
            gender("buey", Some("el buey come hierba")),
            Some(Gender::Masculine)
        );
    }

    #[test]
    fn test_context_agreement() {
        assert_eq!(gender("vacas", Some("las vacas")), Some(Gender::Feminine));
        assert_eq!(
            gender("hombres", Some("estos hombres comen pasta")),
            Some(Gender::Masculine)
        );
        assert_eq!(
            gender("escultora", Some("esta famosa escultora")),
            Some(Gender::Feminine)
        );
        assert_eq!(
            gender("escultor", Some("este famoso escultor")),
            Some(Gender::Masculine)
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(gender("", None), None);
        assert_eq!(gender("xyz", None), None);
    }
}
