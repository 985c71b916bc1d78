//! Benchmarks for number, normalization and date-time extraction

use chrono::NaiveDate;
use cifra_core::{get_parser, LanguageParser, SpanishParser};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const NUMBER_INPUTS: &[(&str, &str)] = &[
    ("digits", "la prueba es 3"),
    ("mixed", "tengo 1 y 3/4 de copas"),
    ("words", "novecientos noventa y nueve mil novecientos noventa y nueve"),
    ("fraction", "tres cuartos de taza"),
];

const DATETIME_INPUTS: &[(&str, &str)] = &[
    ("relative_day", "Qué tiempo hará mañana?"),
    ("weekday_clock", "el jueves a las 8 de la tarde"),
    ("calendar", "nació el 26 de julio de 1953"),
    ("offset_chain", "beber la cerveza en 2 horas y 23 minutos"),
    ("no_match", "frase inútil sin ninguna fecha"),
];

/// Generate a long utterance by repeating a phrase
fn generate_text(phrase: &str, repeat: usize) -> String {
    vec![phrase; repeat].join(" ")
}

fn bench_extract_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_number");
    let parser = get_parser("es").unwrap();

    for (name, text) in NUMBER_INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| parser.extract_number(black_box(text), None));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let parser = get_parser("es").unwrap();

    for repeat in [1, 10, 100] {
        let text = generate_text("mi novia tiene veinticinco copas y las dos mil", repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| parser.normalize(black_box(text), true));
        });
    }

    group.finish();
}

fn bench_extract_datetime(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_datetime");
    let parser = get_parser("es").unwrap();
    let anchor = NaiveDate::from_ymd_opt(2017, 6, 27)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for (name, text) in DATETIME_INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| parser.extract_datetime(black_box(text), anchor));
        });
    }

    group.finish();
}

/// Cost of compiling the embedded lexicon from TOML
fn bench_lexicon_build(c: &mut Criterion) {
    let source = include_str!("../configs/languages/spanish.toml");
    c.bench_function("lexicon_build", |b| {
        b.iter(|| SpanishParser::from_toml_str(black_box(source)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_extract_number,
    bench_normalize,
    bench_extract_datetime,
    bench_lexicon_build
);
criterion_main!(benches);
