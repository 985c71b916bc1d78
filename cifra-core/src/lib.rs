//! Spanish numeral, fraction and date-time extraction
//!
//! This crate turns free-form Spanish utterances into structured values:
//! cardinal and fractional numbers, and absolute date-times resolved
//! against a reference moment. Whatever the extractors do not consume is
//! returned as leftover text for further interpretation.
//!
//! # Architecture
//!
//! - **Tokenizer**: lowercases, folds `p.m.`, splits into position-tracked
//!   tokens and keeps `3/4` and `10:45` atomic
//! - **Lexicon**: a TOML lexicon compiled into read-only tables
//! - **Resolvers**: numeral grammar, fractions, temporal passes and leftover
//!   reconstruction, all borrowing the lexicon tables
//! - **LanguageParser**: the per-locale contract, implemented for Spanish
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cifra_core::{get_parser, LanguageParser};
//!
//! let parser = get_parser("es").unwrap();
//!
//! let number = parser.extract_number("tres cuartos de copa", None).unwrap();
//! assert_eq!(number.value(), 0.75);
//!
//! assert_eq!(parser.normalize("treinta y dos caballos", true), "32 caballos");
//!
//! let anchor = NaiveDate::from_ymd_opt(2017, 6, 27)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let found = parser.extract_datetime("Qué tiempo hará mañana?", anchor);
//! assert_eq!(found.value.unwrap().datetime.to_string(), "2017-06-28 00:00:00");
//! assert_eq!(found.leftover, "qué tiempo hará");
//! ```

pub mod error;
pub mod language;
pub mod resolve;
pub mod tokenizer;
pub mod types;

pub use error::{CoreError, Result};
pub use language::{canonical_code, get_lexicon, get_parser, LanguageParser, Lexicon, SpanishParser};
pub use tokenizer::Tokenizer;
pub use types::{
    DateTimeMatch, Extraction, Gender, Number, NumberKind, NumberMatch, Span, TimeUnit, Token,
};
