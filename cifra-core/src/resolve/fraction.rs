//! Fractions and additive mixed numbers

use crate::language::tables::FractionTable;
use crate::resolve::numeral::NumeralResolver;
use crate::types::{Number, NumberKind, NumberMatch, Span, Token};

const OF: &str = "de";
const AND: &str = "y";

/// Recognizes `N/M`, numerator + denominator word, and standalone halves
#[derive(Debug, Clone, Copy)]
pub struct FractionResolver<'a> {
    numerals: NumeralResolver<'a>,
    table: &'a FractionTable,
    allowed: Option<&'a [u64]>,
}

impl<'a> FractionResolver<'a> {
    pub fn new(numerals: NumeralResolver<'a>, table: &'a FractionTable) -> Self {
        Self {
            numerals,
            table,
            allowed: None,
        }
    }

    /// Restrict spelled-out denominators to `allowed`
    pub fn with_allowed(mut self, allowed: Option<&'a [u64]>) -> Self {
        self.allowed = allowed;
        self
    }

    fn accepts(&self, denominator: u64) -> bool {
        self.allowed
            .map_or(true, |allowed| allowed.contains(&denominator))
    }

    /// Denominator named by a lone word ("cuarto" -> 4)
    pub fn denominator(&self, token: &Token) -> Option<u64> {
        self.table
            .denominator(&token.text)
            .filter(|d| self.accepts(*d))
    }

    /// Fraction value at `start` and the index one past it, without the
    /// trailing "de"
    pub fn value_at(&self, tokens: &[Token], start: usize) -> Option<(Number, usize)> {
        let token = tokens.get(start)?;

        if let Some((numerator, denominator)) = token.slash_pair() {
            return Some((Number::new(numerator, denominator)?, start + 1));
        }
        if let Some((numerator, pos)) = self.numerals.cardinal_at(tokens, start) {
            let denominator = tokens.get(pos).and_then(|t| self.denominator(t))?;
            return Some((Number::new(numerator, denominator)?, pos + 1));
        }
        if self.table.is_standalone_half(&token.text) && self.accepts(2) {
            return Some((Number::new(1, 2)?, start + 1));
        }
        None
    }

    /// Fraction starting at `start`; a trailing "de" is absorbed when another
    /// token follows it ("un cuarto de copa")
    pub fn fraction_at(&self, tokens: &[Token], start: usize) -> Option<NumberMatch> {
        let (number, mut end) = self.value_at(tokens, start)?;
        if tokens.get(end).is_some_and(|t| t.text == OF) && end + 1 < tokens.len() {
            end += 1;
        }

        Some(NumberMatch::new(
            number,
            NumberKind::Fraction,
            Span::new(start, end),
        ))
    }

    /// `<integer> [word] y <fraction>` ("una copa y media", "1 y 3/4")
    pub fn mixed_at(&self, tokens: &[Token], start: usize) -> Option<NumberMatch> {
        let (whole, mut pos) = self.numerals.cardinal_at(tokens, start)?;

        if tokens.get(pos).is_some_and(|t| t.text != AND) {
            let word = &tokens[pos];
            if self.numerals.is_number_token(word) || self.table.denominator(&word.text).is_some()
            {
                return None;
            }
            pos += 1;
        }
        if tokens.get(pos).map(|t| t.text.as_str()) != Some(AND) {
            return None;
        }

        let fraction = self.fraction_at(tokens, pos + 1)?;
        let number = Number::integer(whole).checked_add(fraction.number)?;
        Some(NumberMatch::new(
            number,
            NumberKind::Fraction,
            Span::new(start, fraction.span.end),
        ))
    }
}
