//! Configuration structures and validation
//!
//! This module defines the TOML schema for a language lexicon.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Gender, TimeUnit};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub articles: Articles,
    pub numerals: Numerals,
    pub fractions: Fractions,
    pub temporal: Temporal,
    #[serde(default)]
    pub gender: GenderRules,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Article configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Articles {
    /// Articles removed by `normalize` when article stripping is on
    pub definite: Vec<String>,
}

/// Cardinal numeral grammar, one map per lexical class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Numerals {
    pub units: HashMap<String, u64>,
    pub teens: HashMap<String, u64>,
    pub tens: HashMap<String, u64>,
    pub hundreds: HashMap<String, u64>,
    pub scales: HashMap<String, u64>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
    #[serde(default)]
    pub ordinals: HashMap<String, u64>,
}

/// Fraction lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fractions {
    /// Words that mean one half with no numerator ("medio")
    #[serde(default)]
    pub standalone_half: Vec<String>,
    pub denominators: Vec<Denominator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Denominator {
    pub value: u64,
    /// Masculine singular base forms
    pub forms: Vec<String>,
}

/// Temporal lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Temporal {
    /// Words dropped from the date-time leftover
    #[serde(default)]
    pub filler: Vec<String>,
    #[serde(default)]
    pub plural_folds: Vec<PluralFold>,
    /// Weekday name -> days from Monday
    pub weekdays: HashMap<String, u32>,
    pub months: HashMap<String, u32>,
    pub units: HashMap<String, TimeUnit>,
    /// Relative day word -> day offset from the anchor
    pub relative_days: HashMap<String, i64>,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub fixed_times: Vec<FixedTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluralFold {
    pub from: String,
    pub to: String,
}

/// Part of the day ("tarde"), used both as meridiem marker and as a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub word: String,
    /// Hour used when no clock time accompanies the period
    pub hour: u32,
    /// Whether a clock hour below 12 is moved to the afternoon
    pub afternoon: bool,
    /// Whether "12" in this period means 00:00 ("las doce de la noche")
    #[serde(default)]
    pub twelve_is_midnight: bool,
}

/// A lexeme naming a fixed time of day ("mediodía", "a media tarde")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTime {
    pub words: Vec<String>,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    /// Only matches when preceded by the preposition "a"
    #[serde(default)]
    pub requires_preposition: bool,
}

/// Gender heuristic configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderRules {
    #[serde(default)]
    pub feminine_determiners: Vec<String>,
    #[serde(default)]
    pub masculine_determiners: Vec<String>,
    /// Ordered; the first matching suffix wins
    #[serde(default)]
    pub suffixes: Vec<SuffixRule>,
    #[serde(default)]
    pub exceptions: HashMap<String, Gender>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub gender: Gender,
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.numerals.units.is_empty() {
            return Err("No numeral units defined".to_string());
        }

        for (word, value) in &self.numerals.units {
            if *value > 9 {
                return Err(format!("Unit '{word}' out of range: {value}"));
            }
        }
        for (word, value) in &self.numerals.teens {
            if !(10..=19).contains(value) {
                return Err(format!("Teen '{word}' out of range: {value}"));
            }
        }
        for (word, value) in &self.numerals.tens {
            if !(20..=99).contains(value) {
                return Err(format!("Ten '{word}' out of range: {value}"));
            }
        }
        for (word, value) in &self.numerals.hundreds {
            if *value < 100 || *value > 900 || value % 100 != 0 {
                return Err(format!("Hundred '{word}' out of range: {value}"));
            }
        }

        for denominator in &self.fractions.denominators {
            if denominator.value < 2 {
                return Err(format!(
                    "Denominator must be at least 2, got {}",
                    denominator.value
                ));
            }
            if denominator.forms.is_empty() {
                return Err(format!(
                    "Denominator {} has no surface forms",
                    denominator.value
                ));
            }
        }

        // Ordinal-position words and fraction words must not overlap
        for denominator in &self.fractions.denominators {
            for form in &denominator.forms {
                if self.numerals.ordinals.contains_key(form) {
                    return Err(format!("'{form}' is both an ordinal and a fraction"));
                }
            }
        }

        for (word, days) in &self.temporal.weekdays {
            if *days > 6 {
                return Err(format!("Weekday '{word}' out of range: {days}"));
            }
        }
        for (word, month) in &self.temporal.months {
            if !(1..=12).contains(month) {
                return Err(format!("Month '{word}' out of range: {month}"));
            }
        }
        for period in &self.temporal.periods {
            if period.hour > 23 {
                return Err(format!("Period '{}' hour out of range", period.word));
            }
        }
        for fixed in &self.temporal.fixed_times {
            if fixed.words.is_empty() || fixed.hour > 23 || fixed.minute > 59 {
                return Err(format!("Invalid fixed time {:?}", fixed.words));
            }
        }

        Ok(())
    }
}
