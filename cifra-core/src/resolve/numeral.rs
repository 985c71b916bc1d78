//! Cardinal numeral grammar
//!
//! A group is `hundred? (teen | ten [y unit] | unit)?`; a group followed by
//! the scale word is multiplied and may take one trailing group, which
//! bounds every value to 0..=999_999.

use crate::language::tables::{NumeralClass, NumeralEntry, NumeralTable};
use crate::types::{Number, NumberKind, NumberMatch, Span, Token};

/// Resolves runs of numeral words into integers
#[derive(Debug, Clone, Copy)]
pub struct NumeralResolver<'a> {
    table: &'a NumeralTable,
}

impl<'a> NumeralResolver<'a> {
    pub fn new(table: &'a NumeralTable) -> Self {
        Self { table }
    }

    /// Whether the token is a cardinal numeral word or a digit literal
    pub fn is_number_token(&self, token: &Token) -> bool {
        token.is_digits() || self.table.is_cardinal(&token.text)
    }

    /// Resolve the maximal run of numeral words starting at `start`
    ///
    /// Returns the value and the index one past the run. Digit literals are
    /// not part of the grammar.
    pub fn resolve_at(&self, tokens: &[Token], start: usize) -> Option<(u64, usize)> {
        if let Some((group, pos)) = self.group_at(tokens, start) {
            return Some(self.scaled(tokens, group, pos));
        }

        // Bare scale word: "mil" means one thousand unless it follows a
        // number it could not be attached to
        let entry = self.entry(tokens, start)?;
        if entry.class != NumeralClass::Scale {
            return None;
        }
        if start > 0 && self.is_number_token(&tokens[start - 1]) {
            return None;
        }
        Some(self.scaled(tokens, 1, start))
    }

    /// Resolve a numeral run or a single digit literal
    pub fn cardinal_at(&self, tokens: &[Token], start: usize) -> Option<(u64, usize)> {
        if let Some(value) = tokens.get(start)?.digits() {
            return Some((value, start + 1));
        }
        self.resolve_at(tokens, start)
    }

    /// Cardinal match covering the run at `start`
    pub fn match_cardinal(&self, tokens: &[Token], start: usize) -> Option<NumberMatch> {
        let (value, end) = self.cardinal_at(tokens, start)?;
        Some(NumberMatch::new(
            Number::integer(value),
            NumberKind::Integer,
            Span::new(start, end),
        ))
    }

    /// Ordinal position word mapped to its cardinal ("tercer" -> 3)
    pub fn match_ordinal(&self, tokens: &[Token], start: usize) -> Option<NumberMatch> {
        let entry = self.entry(tokens, start)?;
        if entry.class != NumeralClass::Ordinal {
            return None;
        }
        Some(NumberMatch::new(
            Number::integer(entry.value),
            NumberKind::Ordinal,
            Span::new(start, start + 1),
        ))
    }

    fn entry(&self, tokens: &[Token], index: usize) -> Option<NumeralEntry> {
        tokens.get(index).and_then(|t| self.table.get(&t.text))
    }

    fn class_at(&self, tokens: &[Token], index: usize) -> Option<NumeralClass> {
        self.entry(tokens, index).map(|e| e.class)
    }

    /// Apply a following scale word to `group`, then add one trailing group
    fn scaled(&self, tokens: &[Token], group: u64, pos: usize) -> (u64, usize) {
        let Some(scale) = self
            .entry(tokens, pos)
            .filter(|e| e.class == NumeralClass::Scale)
        else {
            return (group, pos);
        };

        let mut value = group.saturating_mul(scale.value);
        let mut end = pos + 1;
        if let Some((trailing, next)) = self.group_at(tokens, end) {
            value = value.saturating_add(trailing);
            end = next;
        }
        (value, end)
    }

    fn group_at(&self, tokens: &[Token], start: usize) -> Option<(u64, usize)> {
        let mut value = 0;
        let mut pos = start;

        if let Some(entry) = self.entry(tokens, pos) {
            if entry.class == NumeralClass::Hundred {
                value += entry.value;
                pos += 1;
            }
        }

        if let Some(entry) = self.entry(tokens, pos) {
            match entry.class {
                NumeralClass::Teen | NumeralClass::Unit => {
                    value += entry.value;
                    pos += 1;
                }
                NumeralClass::Ten => {
                    value += entry.value;
                    pos += 1;
                    // "treinta y dos"; the conjunction is only eaten when a
                    // unit follows it
                    if entry.is_round_ten()
                        && self.class_at(tokens, pos) == Some(NumeralClass::Conjunction)
                    {
                        if let Some(unit) = self
                            .entry(tokens, pos + 1)
                            .filter(|e| e.class == NumeralClass::Unit && e.value > 0)
                        {
                            value += unit.value;
                            pos += 2;
                        }
                    }
                }
                _ => {}
            }
        }

        (pos > start).then_some((value, pos))
    }
}
