//! External lexicon loading and gender lookups

use std::fs;

use cifra_core::{get_parser, CoreError, Gender, LanguageParser, SpanishParser};

const SPANISH: &str = include_str!("../configs/languages/spanish.toml");

#[test]
fn test_embedded_lexicon_parses() {
    let parser = SpanishParser::from_toml_str(SPANISH).unwrap();
    assert_eq!(parser.code(), "es");
    assert_eq!(parser.lexicon().name(), "Spanish");
    assert_eq!(parser.lexicon().max_denominator(), 30);
    assert_eq!(parser.normalize("veintiún copas", true), "21 copas");
}

#[test]
fn test_load_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    let custom = SPANISH.replace("code = \"es\"", "code = \"es-mx\"");
    fs::write(&path, custom).unwrap();

    let parser = SpanishParser::load_lexicon_file(&path).unwrap();
    assert_eq!(parser.code(), "es-mx");
    assert_eq!(parser.normalize("dos mil", true), "2000");
}

#[test]
fn test_extended_lexicon() {
    let hundredth = "\n[[fractions.denominators]]\nvalue = 100\nforms = [\"centésimo\"]\n\n[temporal]\n";
    let extended = SPANISH.replace("\n[temporal]\n", hundredth);
    let parser = SpanishParser::from_toml_str(&extended).unwrap();

    assert_eq!(parser.lexicon().max_denominator(), 100);
    let m = parser.extract_number("tres centésimas de litro", None).unwrap();
    assert!((m.value() - 0.03).abs() < 1e-9);
    assert!(get_parser("es")
        .unwrap()
        .extract_number("centésimas", None)
        .is_none());
}

#[test]
fn test_malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[metadata\ncode = ").unwrap();

    match SpanishParser::load_lexicon_file(&path) {
        Err(CoreError::LexiconParse { code, .. }) => assert!(code.ends_with("broken.toml")),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_invalid_lexicon_is_rejected() {
    let invalid = SPANISH.replace("\nnueve = 9\n", "\nnueve = 90\n");
    assert!(matches!(
        SpanishParser::from_toml_str(&invalid),
        Err(CoreError::LexiconInvalid(_))
    ));

    let overlapping = SPANISH.replace("forms = [\"tercio\"]", "forms = [\"tercio\", \"segundo\"]");
    assert!(matches!(
        SpanishParser::from_toml_str(&overlapping),
        Err(CoreError::LexiconInvalid(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        SpanishParser::load_lexicon_file("/nonexistent/cifra/lexicon.toml"),
        Err(CoreError::Io(_))
    ));
}

#[test]
fn test_gender() {
    let parser = get_parser("es").unwrap();
    let gender = |word: &str, context: Option<&str>| parser.gender(word, context);

    assert_eq!(gender("mula", None), Some(Gender::Feminine));
    assert_eq!(gender("caballo", None), Some(Gender::Masculine));
    assert_eq!(gender("vacas", Some("las vacas")), Some(Gender::Feminine));
    assert_eq!(gender("perros", Some("los perros")), Some(Gender::Masculine));
    assert_eq!(gender("buey", Some("el buey come hierba")), Some(Gender::Masculine));
    assert_eq!(gender("pescado", Some("el pescado nada")), Some(Gender::Masculine));
    assert_eq!(gender("tigre", None), Some(Gender::Masculine));
    assert_eq!(gender("hombres", Some("estos hombres comen pasta")), Some(Gender::Masculine));
    assert_eq!(gender("puente", Some("el puente")), Some(Gender::Masculine));
    assert_eq!(gender("puente", Some("este puente ha caído")), Some(Gender::Masculine));
    assert_eq!(gender("escultora", Some("esta famosa escultora")), Some(Gender::Feminine));
    assert_eq!(gender("escultor", Some("este famoso escultor")), Some(Gender::Masculine));
    assert_eq!(
        gender("escultores", Some("los escultores renacentistas")),
        Some(Gender::Masculine)
    );
    assert_eq!(gender("escultoras", Some("las escultoras modernas")), Some(Gender::Feminine));
    assert_eq!(gender("leyes", None).map(|g| g.as_str()), Some("f"));
}
