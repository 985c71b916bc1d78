//! Property-based tests

use chrono::{Datelike, Duration, NaiveDate};
use cifra_core::{get_parser, LanguageParser};
use proptest::prelude::*;

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const WORDS: [&str; 24] = [
    "un", "una", "dos", "tres", "nueve", "diez", "quince", "veinte", "veintidós", "treinta",
    "cuarenta", "y", "cien", "ciento", "doscientas", "mil", "la", "el", "copas", "de", "tercer",
    "medio", "7", "3/4",
];

fn anchor_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|days| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(days)
    })
}

proptest! {
    #[test]
    fn weekday_is_strictly_after_anchor(date in anchor_date(), day in 0usize..7) {
        let parser = get_parser("es").unwrap();
        let anchor = date.and_hms_opt(10, 0, 0).unwrap();
        let text = format!("nos vemos el {}", WEEKDAYS[day]);

        let resolved = parser.extract_datetime(&text, anchor).value.unwrap().datetime.date();
        prop_assert!(resolved > date);
        prop_assert!(resolved <= date + Duration::days(7));
        prop_assert_eq!(resolved.weekday().num_days_from_monday() as usize, day);
    }

    #[test]
    fn past_weekday_is_strictly_before_anchor(date in anchor_date(), day in 0usize..7) {
        let parser = get_parser("es").unwrap();
        let anchor = date.and_hms_opt(10, 0, 0).unwrap();
        let text = format!("volver al pasado {}", WEEKDAYS[day]);

        let resolved = parser.extract_datetime(&text, anchor).value.unwrap().datetime.date();
        prop_assert!(resolved < date);
        prop_assert!(resolved >= date - Duration::days(7));
    }

    #[test]
    fn normalize_is_idempotent(words in prop::collection::vec(prop::sample::select(&WORDS[..]), 0..12)) {
        let parser = get_parser("es").unwrap();
        let text = words.join(" ");

        let once = parser.normalize(&text, true);
        let twice = parser.normalize(&once, true);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn extraction_never_panics(text in "\\PC{0,40}") {
        let parser = get_parser("es").unwrap();
        let anchor = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let _ = parser.extract_number(&text, None);
        let _ = parser.normalize(&text, true);
        let _ = parser.extract_datetime(&text, anchor);
        let _ = parser.gender(&text, Some(&text));
    }
}
