//! Consumption tracking and leftover reconstruction

use smallvec::SmallVec;

use crate::language::tables::TemporalTable;
use crate::types::Token;

/// Marks which tokens a production has used
///
/// Tokens are never removed; consuming one only flips its flag, so the
/// leftover keeps the input order.
#[derive(Debug, Clone)]
pub struct ConsumedSet {
    flags: Vec<bool>,
}

impl ConsumedSet {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline]
    pub fn is_consumed(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Whether every index in `start..end` is still free
    pub fn all_free(&self, start: usize, end: usize) -> bool {
        end <= self.flags.len() && (start..end).all(|i| !self.flags[i])
    }

    pub fn consume(&mut self, index: usize) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = true;
        }
    }

    pub fn consume_range(&mut self, start: usize, end: usize) {
        for index in start..end {
            self.consume(index);
        }
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }

    /// Indices of every consumed token
    pub fn indices(&self) -> SmallVec<[usize; 8]> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.then_some(i))
            .collect()
    }
}

/// Joins the tokens no production used, minus connector words
pub struct LeftoverAssembler<'a> {
    temporal: &'a TemporalTable,
}

impl<'a> LeftoverAssembler<'a> {
    /// Drop connector words ("de", "la", "esta", ...) along the way
    pub fn without_filler(temporal: &'a TemporalTable) -> Self {
        Self { temporal }
    }

    pub fn assemble(&self, tokens: &[Token], consumed: &ConsumedSet) -> String {
        tokens
            .iter()
            .filter(|t| !consumed.is_consumed(t.index))
            .filter(|t| !self.temporal.is_filler(&t.text))
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_consumed_tokens_are_skipped() {
        let lexicon = get_lexicon("es").unwrap();
        let tokens = Tokenizer::tokenize("pon un recordatorio a las diez");
        let mut consumed = ConsumedSet::new(tokens.len());
        consumed.consume_range(3, 6);

        assert_eq!(
            LeftoverAssembler::without_filler(lexicon.temporal()).assemble(&tokens, &consumed),
            "pon recordatorio"
        );
        assert_eq!(consumed.indices().as_slice(), &[3, 4, 5]);
        assert!(!consumed.all_free(2, 4));
        assert!(consumed.all_free(0, 3));
    }

    #[test]
    fn test_filler_is_dropped() {
        let lexicon = get_lexicon("es").unwrap();
        let tokens = Tokenizer::tokenize("recuérdame llamar a mamá el y");
        let consumed = ConsumedSet::new(tokens.len());

        assert_eq!(
            LeftoverAssembler::without_filler(lexicon.temporal()).assemble(&tokens, &consumed),
            "recuérdame llamar mamá y"
        );
    }

    #[test]
    fn test_empty_input() {
        let lexicon = get_lexicon("es").unwrap();
        let consumed = ConsumedSet::new(0);
        assert_eq!(
            LeftoverAssembler::without_filler(lexicon.temporal()).assemble(&[], &consumed),
            ""
        );
        assert!(!consumed.any());
    }
}
