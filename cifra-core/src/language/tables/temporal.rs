//! Temporal lexicon: weekdays, months, units, periods and fixed times

use std::collections::{HashMap, HashSet};

use chrono::Weekday;

use crate::language::config::Temporal;
use crate::types::TimeUnit;

/// Part of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodEntry {
    /// Hour used when the period stands alone
    pub hour: u32,
    /// Clock hours below 12 move to the afternoon
    pub afternoon: bool,
    pub twelve_is_midnight: bool,
}

/// Multi-word lexeme naming a fixed time of day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimeEntry {
    pub words: Vec<String>,
    pub hour: u32,
    pub minute: u32,
    pub requires_preposition: bool,
}

/// Read-only temporal lookups
#[derive(Debug, Clone, Default)]
pub struct TemporalTable {
    filler: HashSet<String>,
    plural_folds: Vec<(String, String)>,
    weekdays: HashMap<String, Weekday>,
    months: HashMap<String, u32>,
    units: HashMap<String, TimeUnit>,
    relative_days: HashMap<String, i64>,
    periods: HashMap<String, PeriodEntry>,
    fixed_times: Vec<FixedTimeEntry>,
}

impl TemporalTable {
    pub fn from_config(config: &Temporal) -> Result<Self, String> {
        let weekdays = config
            .weekdays
            .iter()
            .map(|(word, days)| {
                weekday_from_monday(*days)
                    .map(|weekday| (word.to_lowercase(), weekday))
                    .ok_or_else(|| format!("Weekday '{word}' out of range: {days}"))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let periods = config
            .periods
            .iter()
            .map(|p| {
                (
                    p.word.to_lowercase(),
                    PeriodEntry {
                        hour: p.hour,
                        afternoon: p.afternoon,
                        twelve_is_midnight: p.twelve_is_midnight,
                    },
                )
            })
            .collect();

        // Longest phrases first so "medio día" wins over any single word
        let mut fixed_times: Vec<FixedTimeEntry> = config
            .fixed_times
            .iter()
            .map(|f| FixedTimeEntry {
                words: f.words.iter().map(|w| w.to_lowercase()).collect(),
                hour: f.hour,
                minute: f.minute,
                requires_preposition: f.requires_preposition,
            })
            .collect();
        fixed_times.sort_by(|a, b| b.words.len().cmp(&a.words.len()));

        Ok(Self {
            filler: config.filler.iter().map(|w| w.to_lowercase()).collect(),
            plural_folds: config
                .plural_folds
                .iter()
                .map(|f| (f.from.to_lowercase(), f.to.to_lowercase()))
                .collect(),
            weekdays,
            months: lowercase_keys(&config.months),
            units: lowercase_keys(&config.units),
            relative_days: lowercase_keys(&config.relative_days),
            periods,
            fixed_times,
        })
    }

    /// Whether the word is dropped from the date-time leftover
    #[inline]
    pub fn is_filler(&self, word: &str) -> bool {
        self.filler.contains(word)
    }

    /// Fold a plural unit suffix to its singular form
    ///
    /// The fold applies to any word ending in the suffix, so compounds
    /// such as "cumpleaños" fold as well.
    pub fn fold_plural(&self, word: &str) -> Option<String> {
        self.plural_folds.iter().find_map(|(from, to)| {
            word.strip_suffix(from.as_str())
                .map(|stem| format!("{stem}{to}"))
        })
    }

    #[inline]
    pub fn weekday(&self, word: &str) -> Option<Weekday> {
        self.weekdays.get(word).copied()
    }

    #[inline]
    pub fn month(&self, word: &str) -> Option<u32> {
        self.months.get(word).copied()
    }

    #[inline]
    pub fn unit(&self, word: &str) -> Option<TimeUnit> {
        self.units.get(word).copied()
    }

    #[inline]
    pub fn relative_day(&self, word: &str) -> Option<i64> {
        self.relative_days.get(word).copied()
    }

    #[inline]
    pub fn period(&self, word: &str) -> Option<PeriodEntry> {
        self.periods.get(word).copied()
    }

    pub fn fixed_times(&self) -> &[FixedTimeEntry] {
        &self.fixed_times
    }
}

fn lowercase_keys<V: Copy>(map: &HashMap<String, V>) -> HashMap<String, V> {
    map.iter().map(|(k, v)| (k.to_lowercase(), *v)).collect()
}

fn weekday_from_monday(days: u32) -> Option<Weekday> {
    match days {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::config::{FixedTime, PluralFold};

    fn temporal() -> Temporal {
        Temporal {
            filler: vec!["el".to_string(), "de".to_string()],
            plural_folds: vec![
                PluralFold {
                    from: "días".to_string(),
                    to: "día".to_string(),
                },
                PluralFold {
                    from: "años".to_string(),
                    to: "año".to_string(),
                },
            ],
            weekdays: [("jueves".to_string(), 3)].into(),
            months: [("Marzo".to_string(), 3)].into(),
            units: [("día".to_string(), TimeUnit::Day)].into(),
            relative_days: [("hoy".to_string(), 0)].into(),
            periods: vec![],
            fixed_times: vec![
                FixedTime {
                    words: vec!["mediodía".to_string()],
                    hour: 12,
                    minute: 0,
                    requires_preposition: false,
                },
                FixedTime {
                    words: vec!["media".to_string(), "tarde".to_string()],
                    hour: 17,
                    minute: 0,
                    requires_preposition: true,
                },
            ],
        }
    }

    #[test]
    fn test_lookups() {
        let table = TemporalTable::from_config(&temporal()).unwrap();
        assert_eq!(table.weekday("jueves"), Some(Weekday::Thu));
        assert_eq!(table.month("marzo"), Some(3));
        assert_eq!(table.unit("día"), Some(TimeUnit::Day));
        assert_eq!(table.relative_day("hoy"), Some(0));
        assert!(table.is_filler("de"));
        assert!(!table.is_filler("en"));
    }

    #[test]
    fn test_plural_fold_is_a_suffix_rule() {
        let table = TemporalTable::from_config(&temporal()).unwrap();
        assert_eq!(table.fold_plural("días").as_deref(), Some("día"));
        assert_eq!(table.fold_plural("cumpleaños").as_deref(), Some("cumpleaño"));
        assert_eq!(table.fold_plural("semana"), None);
    }

    #[test]
    fn test_fixed_times_longest_first() {
        let table = TemporalTable::from_config(&temporal()).unwrap();
        assert_eq!(table.fixed_times()[0].words.len(), 2);
    }

    #[test]
    fn test_weekday_out_of_range() {
        let mut config = temporal();
        config.weekdays.insert("octavo".to_string(), 7);
        assert!(TemporalTable::from_config(&config).is_err());
    }
}
