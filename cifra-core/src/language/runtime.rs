//! Compiled lexicon
//!
//! Bridges the deserialized configuration and the resolvers: every table is
//! built once and only read afterwards.

use std::collections::HashSet;

use crate::language::{
    config::LexiconConfig,
    tables::{FractionTable, GenderTable, NumeralTable, TemporalTable},
};

/// Read-only lookup tables for one language
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,

    articles: HashSet<String>,
    numerals: NumeralTable,
    fractions: FractionTable,
    temporal: TemporalTable,
    gender: GenderTable,
}

impl Lexicon {
    /// Validate the configuration and compile its tables
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let numerals = NumeralTable::from_config(&config.numerals)?;
        let fractions = FractionTable::from_config(&config.fractions)?;
        let temporal = TemporalTable::from_config(&config.temporal)?;
        let gender = GenderTable::from_config(&config.gender);

        Ok(Self {
            code: config.metadata.code.to_lowercase(),
            name: config.metadata.name.clone(),
            articles: config
                .articles
                .definite
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            numerals,
            fractions,
            temporal,
            gender,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn articles(&self) -> &HashSet<String> {
        &self.articles
    }

    pub fn numerals(&self) -> &NumeralTable {
        &self.numerals
    }

    pub fn fractions(&self) -> &FractionTable {
        &self.fractions
    }

    pub fn temporal(&self) -> &TemporalTable {
        &self.temporal
    }

    pub fn gender(&self) -> &GenderTable {
        &self.gender
    }

    /// Largest denominator a fraction word can name
    pub fn max_denominator(&self) -> u64 {
        self.fractions.max_denominator()
    }
}
