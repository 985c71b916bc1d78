//! Language lexicons and the per-locale parser contract
//!
//! Each language is a TOML lexicon compiled into read-only tables and
//! exposed through [`LanguageParser`].

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod spanish;
pub(crate) mod tables;

pub use interface::LanguageParser;
pub use loader::{canonical_code, get_lexicon, get_parser};
pub use runtime::Lexicon;
pub use spanish::SpanishParser;
