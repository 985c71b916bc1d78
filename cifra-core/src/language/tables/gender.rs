//! Gender heuristic tables

use std::collections::{HashMap, HashSet};

use crate::language::config::GenderRules;
use crate::types::Gender;

#[derive(Debug, Clone, Default)]
pub struct GenderTable {
    feminine_determiners: HashSet<String>,
    masculine_determiners: HashSet<String>,
    suffixes: Vec<(String, Gender)>,
    exceptions: HashMap<String, Gender>,
}

impl GenderTable {
    pub fn from_config(config: &GenderRules) -> Self {
        Self {
            feminine_determiners: config
                .feminine_determiners
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            masculine_determiners: config
                .masculine_determiners
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            suffixes: config
                .suffixes
                .iter()
                .map(|r| (r.suffix.to_lowercase(), r.gender))
                .collect(),
            exceptions: config
                .exceptions
                .iter()
                .map(|(w, g)| (w.to_lowercase(), *g))
                .collect(),
        }
    }

    pub fn determiner(&self, word: &str) -> Option<Gender> {
        if self.feminine_determiners.contains(word) {
            Some(Gender::Feminine)
        } else if self.masculine_determiners.contains(word) {
            Some(Gender::Masculine)
        } else {
            None
        }
    }

    pub fn exception(&self, word: &str) -> Option<Gender> {
        self.exceptions.get(word).copied()
    }

    /// First suffix rule matching the word
    pub fn suffix(&self, word: &str) -> Option<Gender> {
        self.suffixes
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix.as_str()))
            .map(|(_, gender)| *gender)
    }
}
