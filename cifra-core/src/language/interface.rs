//! Per-locale extraction contract
//!
//! Callers hold an `Arc<dyn LanguageParser>` and never see which locale
//! implements it. Every method is a pure function of its arguments.

use chrono::NaiveDateTime;

use crate::types::{DateTimeMatch, Extraction, Gender, NumberMatch};

/// Number, date-time and gender extraction for one language
pub trait LanguageParser: Send + Sync + 'static {
    /// Language code of the lexicon ("es")
    fn code(&self) -> &str;

    /// First number, fraction or ordinal in the text, scanning left to right
    ///
    /// `denominators` restricts which spelled-out denominators are accepted;
    /// explicit `N/M` literals are never restricted.
    fn extract_number(&self, text: &str, denominators: Option<&[u64]>) -> Option<NumberMatch>;

    /// Replace spelled-out numerals by digits, optionally removing definite
    /// articles
    fn normalize(&self, text: &str, remove_articles: bool) -> String;

    /// Resolve the temporal expressions in `text` against `anchor`
    ///
    /// When nothing temporal is found the value is `None` and the leftover
    /// holds the whole normalized input.
    fn extract_datetime(&self, text: &str, anchor: NaiveDateTime) -> Extraction<DateTimeMatch>;

    /// Grammatical gender of `word`, optionally using the sentence it
    /// appears in
    fn gender(&self, word: &str, context: Option<&str>) -> Option<Gender>;
}
