//! Data Transfer Objects for API

use chrono::NaiveDateTime;
use cifra_core::{DateTimeMatch, NumberKind, NumberMatch};

/// An extracted number
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberOutput {
    /// Floating point value
    pub value: f64,
    /// Numerator in lowest terms
    pub numerator: u64,
    /// Denominator in lowest terms, 1 for integers
    pub denominator: u64,
    /// How the number was expressed
    pub kind: NumberKind,
}

impl From<NumberMatch> for NumberOutput {
    fn from(m: NumberMatch) -> Self {
        Self {
            value: m.value(),
            numerator: m.number.numerator(),
            denominator: m.number.denominator(),
            kind: m.kind,
        }
    }
}

/// An extracted date-time with the uninterpreted remainder
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeOutput {
    /// Resolved date-time, the anchor itself when nothing matched
    pub datetime: NaiveDateTime,
    /// Words not consumed by any temporal expression
    pub leftover: String,
    /// Whether a clock time, period, or sub-day offset set the time
    pub has_time: bool,
    /// Whether a temporal expression was found
    pub matched: bool,
}

impl DateTimeOutput {
    pub(crate) fn from_match(m: DateTimeMatch, leftover: String) -> Self {
        Self {
            datetime: m.datetime,
            leftover,
            has_time: m.has_time,
            matched: true,
        }
    }

    pub(crate) fn unmatched(anchor: NaiveDateTime, leftover: String) -> Self {
        Self {
            datetime: anchor,
            leftover,
            has_time: false,
            matched: false,
        }
    }
}
