//! Tagged numeral lexicon
//!
//! Every numeral word maps to exactly one lexical class; the resolvers
//! work on classes, never on spellings.

use std::collections::HashMap;

use crate::language::config::Numerals;

/// Lexical class of a numeral word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralClass {
    /// 0-9
    Unit,
    /// 10-19
    Teen,
    /// 20-90, including the fused 21-29 forms
    Ten,
    /// 100-900
    Hundred,
    /// Multiplier ("mil")
    Scale,
    /// Joins a round ten and a unit ("y")
    Conjunction,
    /// Position word mapped to its cardinal ("tercer")
    Ordinal,
}

/// A classified numeral word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralEntry {
    pub class: NumeralClass,
    pub value: u64,
}

impl NumeralEntry {
    /// Round tens may be continued by "y <unit>"; fused forms may not
    #[inline]
    pub fn is_round_ten(&self) -> bool {
        self.class == NumeralClass::Ten && self.value % 10 == 0
    }
}

/// Word -> class lookup
#[derive(Debug, Clone, Default)]
pub struct NumeralTable {
    entries: HashMap<String, NumeralEntry>,
}

impl NumeralTable {
    /// Build from configuration, rejecting words listed in two classes
    pub fn from_config(config: &Numerals) -> Result<Self, String> {
        let mut table = Self::default();

        let classes = [
            (NumeralClass::Unit, &config.units),
            (NumeralClass::Teen, &config.teens),
            (NumeralClass::Ten, &config.tens),
            (NumeralClass::Hundred, &config.hundreds),
            (NumeralClass::Scale, &config.scales),
            (NumeralClass::Ordinal, &config.ordinals),
        ];
        for (class, words) in classes {
            for (word, value) in words {
                table.insert(word, NumeralEntry { class, value: *value })?;
            }
        }
        for word in &config.conjunctions {
            table.insert(
                word,
                NumeralEntry {
                    class: NumeralClass::Conjunction,
                    value: 0,
                },
            )?;
        }

        Ok(table)
    }

    fn insert(&mut self, word: &str, entry: NumeralEntry) -> Result<(), String> {
        let key = word.to_lowercase();
        if let Some(existing) = self.entries.get(&key) {
            return Err(format!(
                "'{word}' listed as both {:?} and {:?}",
                existing.class, entry.class
            ));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<NumeralEntry> {
        self.entries.get(word).copied()
    }

    /// Whether the word is a cardinal numeral (not "y", not an ordinal)
    pub fn is_cardinal(&self, word: &str) -> bool {
        matches!(
            self.get(word).map(|e| e.class),
            Some(
                NumeralClass::Unit
                    | NumeralClass::Teen
                    | NumeralClass::Ten
                    | NumeralClass::Hundred
                    | NumeralClass::Scale
            )
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
