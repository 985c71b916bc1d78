//! Embedded lexicon loader
//!
//! Lexicons ship inside the binary and are compiled once per process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::language::{
    config::LexiconConfig, interface::LanguageParser, runtime::Lexicon, spanish::SpanishParser,
};

/// Embedded parsers keyed by canonical code; a lexicon that failed to
/// compile keeps its error so every lookup reports it
static EMBEDDED: OnceLock<HashMap<&'static str, EmbeddedLexicon>> = OnceLock::new();

type EmbeddedLexicon = std::result::Result<Arc<SpanishParser>, LoadFailure>;

/// Compilation failure of an embedded lexicon, replayed on every lookup
#[derive(Debug, Clone)]
enum LoadFailure {
    Parse { code: String, reason: String },
    Invalid(String),
}

impl LoadFailure {
    fn to_error(&self) -> CoreError {
        match self {
            LoadFailure::Parse { code, reason } => CoreError::LexiconParse {
                code: code.clone(),
                reason: reason.clone(),
            },
            LoadFailure::Invalid(reason) => CoreError::LexiconInvalid(reason.clone()),
        }
    }
}

const SPANISH_SOURCE: &str = include_str!("../../configs/languages/spanish.toml");

fn embedded() -> &'static HashMap<&'static str, EmbeddedLexicon> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        let spanish = load_embedded("es", SPANISH_SOURCE).map(Arc::new);
        if let Err(e) = &spanish {
            warn!("failed to load Spanish lexicon: {}", e.to_error());
        }
        map.insert("es", spanish);

        map
    })
}

fn load_embedded(code: &str, source: &str) -> std::result::Result<SpanishParser, LoadFailure> {
    let config: LexiconConfig = toml::from_str(source).map_err(|e| LoadFailure::Parse {
        code: code.to_string(),
        reason: e.to_string(),
    })?;
    let lexicon = Lexicon::from_config(&config).map_err(LoadFailure::Invalid)?;
    debug!(
        code,
        name = lexicon.name(),
        numerals = lexicon.numerals().len(),
        "compiled embedded lexicon"
    );
    Ok(SpanishParser::new(Arc::new(lexicon)))
}

/// Canonical code for a language tag: "es", "es-ES", "es_MX", "spa" and
/// "spanish" all map to "es"
pub fn canonical_code(code: &str) -> Option<&'static str> {
    let code = code.trim().to_lowercase();
    let primary = code.split(['-', '_']).next().unwrap_or_default();
    match primary {
        "es" | "spa" | "spanish" => Some("es"),
        _ => None,
    }
}

/// Parser for a language tag
pub fn get_parser(code: &str) -> Result<Arc<dyn LanguageParser>> {
    let parser = embedded_parser(code)?;
    Ok(parser)
}

/// Compiled lexicon for a language tag
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>> {
    Ok(Arc::clone(embedded_parser(code)?.lexicon()))
}

fn embedded_parser(code: &str) -> Result<Arc<SpanishParser>> {
    let entry = canonical_code(code)
        .and_then(|canonical| embedded().get(canonical))
        .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))?;
    entry.as_ref().map(Arc::clone).map_err(LoadFailure::to_error)
}
