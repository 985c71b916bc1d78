//! Core types for number and date-time extraction

use core::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A word or digit group produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token text, accents preserved
    pub text: String,
    /// Position in the token sequence
    pub index: usize,
    /// Byte offset in the normalized text
    pub offset: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, index: usize, offset: usize) -> Self {
        Self {
            text: text.into(),
            index,
            offset,
        }
    }

    /// Whether the token is a run of ASCII digits
    #[inline]
    pub fn is_digits(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Parse the token as a plain digit literal
    pub fn digits(&self) -> Option<u64> {
        if self.is_digits() {
            self.text.parse().ok()
        } else {
            None
        }
    }

    /// Parse a `N/M` digit group
    pub fn slash_pair(&self) -> Option<(u64, u64)> {
        split_digit_pair(&self.text, '/')
    }

    /// Parse a `H:MM` digit group
    pub fn colon_pair(&self) -> Option<(u64, u64)> {
        split_digit_pair(&self.text, ':')
    }
}

fn split_digit_pair(text: &str, separator: char) -> Option<(u64, u64)> {
    let (left, right) = text.split_once(separator)?;
    if left.is_empty() || right.is_empty() {
        return None;
    }
    if !left.bytes().all(|b| b.is_ascii_digit()) || !right.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((left.parse().ok()?, right.parse().ok()?))
}

/// Half-open range of token indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Exact rational value, always kept in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    numerator: u64,
    denominator: u64,
}

impl Number {
    /// Create a rational number; `None` for a zero denominator
    pub fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let divisor = gcd(numerator, denominator);
        Some(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    /// Create an integer value
    pub fn integer(value: u64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Floating point value
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact sum, `None` on overflow
    pub fn checked_add(self, other: Number) -> Option<Number> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Number::new(numerator, denominator)
    }

    /// Multiply by an integer factor, rounding to the nearest integer
    pub fn scale_rounded(self, factor: u64) -> Option<u64> {
        let scaled = self.numerator.checked_mul(factor)?;
        Some(scaled.checked_add(self.denominator / 2)? / self.denominator)
    }

    /// Multiply by an integer factor when the product is whole
    pub fn scale_exact(self, factor: u64) -> Option<u64> {
        let scaled = self.numerator.checked_mul(factor)?;
        if scaled % self.denominator == 0 {
            Some(scaled / self.denominator)
        } else {
            None
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// How a number was expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    Fraction,
    Ordinal,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Fraction => write!(f, "fraction"),
            NumberKind::Ordinal => write!(f, "ordinal"),
        }
    }
}

/// A resolved number and the tokens it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatch {
    pub number: Number,
    pub kind: NumberKind,
    pub span: Span,
}

impl NumberMatch {
    /// Create a new match
    pub fn new(number: Number, kind: NumberKind, span: Span) -> Self {
        Self { number, kind, span }
    }

    /// Floating point value of the match
    pub fn value(&self) -> f64 {
        self.number.value()
    }
}

/// A resolved absolute date-time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeMatch {
    pub datetime: NaiveDateTime,
    /// Indices of every token consumed by a temporal production
    pub consumed: SmallVec<[usize; 8]>,
    /// Whether a clock time, period, or sub-day offset set the time of day
    pub has_time: bool,
}

/// Result of an extraction together with the uninterpreted remainder
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub value: Option<T>,
    pub leftover: String,
}

/// Calendar or clock unit used by relative offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Length in seconds for the clock units
    pub fn seconds(&self) -> Option<u64> {
        match self {
            TimeUnit::Hour => Some(3600),
            TimeUnit::Minute => Some(60),
            TimeUnit::Second => Some(1),
            _ => None,
        }
    }
}

/// Grammatical gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
}

impl Gender {
    /// Short code used by the voice-assistant contract
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_reduces_to_lowest_terms() {
        let half = Number::new(2, 4).unwrap();
        assert_eq!(half.numerator(), 1);
        assert_eq!(half.denominator(), 2);
        assert!(Number::new(3, 0).is_none());
    }

    #[test]
    fn test_number_addition() {
        let sum = Number::integer(1)
            .checked_add(Number::new(3, 4).unwrap())
            .unwrap();
        assert_eq!(sum, Number::new(7, 4).unwrap());
        assert_eq!(sum.value(), 1.75);
        assert_eq!(sum.to_string(), "7/4");
    }

    #[test]
    fn test_number_scaling() {
        let quarter = Number::new(1, 4).unwrap();
        assert_eq!(quarter.scale_exact(3600), Some(900));
        assert_eq!(quarter.scale_exact(1), None);
        assert_eq!(Number::new(1, 7).unwrap().scale_rounded(3600), Some(514));
    }

    #[test]
    fn test_token_digit_groups() {
        assert_eq!(Token::new("3/4", 0, 0).slash_pair(), Some((3, 4)));
        assert_eq!(Token::new("10:45", 0, 0).colon_pair(), Some((10, 45)));
        assert_eq!(Token::new("1700", 0, 0).digits(), Some(1700));
        assert_eq!(Token::new("uno", 0, 0).digits(), None);
        assert_eq!(Token::new("3/", 0, 0).slash_pair(), None);
    }
}
