//! Fraction denominator lexicon

use std::collections::{HashMap, HashSet};

use crate::language::config::Fractions;

/// Surface form -> denominator lookup
#[derive(Debug, Clone, Default)]
pub struct FractionTable {
    forms: HashMap<String, u64>,
    half: HashSet<String>,
    max_denominator: u64,
}

impl FractionTable {
    /// Build from configuration, expanding each base into its inflections
    pub fn from_config(config: &Fractions) -> Result<Self, String> {
        let mut table = Self::default();

        for denominator in &config.denominators {
            for base in &denominator.forms {
                for form in inflections(&base.to_lowercase()) {
                    match table.forms.get(&form) {
                        Some(existing) if *existing != denominator.value => {
                            return Err(format!(
                                "'{form}' maps to both {existing} and {}",
                                denominator.value
                            ));
                        }
                        _ => {
                            table.forms.insert(form, denominator.value);
                        }
                    }
                }
            }
            table.max_denominator = table.max_denominator.max(denominator.value);
        }

        table.half = config
            .standalone_half
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        Ok(table)
    }

    /// Denominator named by the word, if any
    #[inline]
    pub fn denominator(&self, word: &str) -> Option<u64> {
        self.forms.get(word).copied()
    }

    /// Whether the word alone means one half
    #[inline]
    pub fn is_standalone_half(&self, word: &str) -> bool {
        self.half.contains(word)
    }

    pub fn max_denominator(&self) -> u64 {
        self.max_denominator
    }
}

/// Gender and number inflections of a masculine singular base
fn inflections(base: &str) -> Vec<String> {
    match base.strip_suffix('o') {
        Some(stem) => vec![
            base.to_string(),
            format!("{stem}a"),
            format!("{stem}os"),
            format!("{stem}as"),
        ],
        None => vec![base.to_string(), format!("{base}s")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::config::Denominator;

    fn fractions() -> Fractions {
        Fractions {
            standalone_half: vec!["medio".to_string(), "media".to_string()],
            denominators: vec![
                Denominator {
                    value: 2,
                    forms: vec!["medio".to_string()],
                },
                Denominator {
                    value: 20,
                    forms: vec!["veinteavo".to_string(), "vigésimo".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_inflected_forms() {
        let table = FractionTable::from_config(&fractions()).unwrap();
        assert_eq!(table.denominator("veinteava"), Some(20));
        assert_eq!(table.denominator("vigésimas"), Some(20));
        assert_eq!(table.denominator("medios"), Some(2));
        assert_eq!(table.denominator("copa"), None);
        assert_eq!(table.max_denominator(), 20);
    }

    #[test]
    fn test_standalone_half() {
        let table = FractionTable::from_config(&fractions()).unwrap();
        assert!(table.is_standalone_half("media"));
        assert!(!table.is_standalone_half("vigésima"));
    }

    #[test]
    fn test_conflicting_forms_are_rejected() {
        let mut config = fractions();
        config.denominators.push(Denominator {
            value: 3,
            forms: vec!["media".to_string()],
        });
        assert!(FractionTable::from_config(&config).is_err());
    }
}
