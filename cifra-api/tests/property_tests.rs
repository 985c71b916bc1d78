//! Property-based tests for the unmatched-date-time policies

use chrono::{Duration, NaiveDate, NaiveDateTime};
use cifra_api::{Config, DateTimeOutput, Extractor, UnmatchedPolicy};
use proptest::prelude::*;

const WORDS: [&str; 20] = [
    "cena", "con", "amigos", "el", "jueves", "lunes", "mañana", "a", "las", "8", "de", "la",
    "tarde", "en", "dos", "días", "pasado", "frase", "inútil", "mayo",
];

fn extractor(policy: UnmatchedPolicy) -> Extractor {
    Extractor::with_config(Config::builder().unmatched_datetime(policy).build().unwrap()).unwrap()
}

fn anchor() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..3650, 0u32..24).prop_map(|(days, hour)| {
        (NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(days))
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    })
}

proptest! {
    #[test]
    fn policies_only_differ_on_unmatched_input(
        words in prop::collection::vec(prop::sample::select(&WORDS[..]), 0..8),
        anchor in anchor(),
    ) {
        let text = words.join(" ");
        let soft = extractor(UnmatchedPolicy::Leftover)
            .extract_datetime(&text, Some(anchor))
            .unwrap();
        let strict = extractor(UnmatchedPolicy::NotFound).extract_datetime(&text, Some(anchor));

        if soft.matched {
            prop_assert_eq!(strict, Some(soft));
        } else {
            prop_assert_eq!(strict, None);
            prop_assert_eq!(soft.datetime, anchor);
            prop_assert!(!soft.has_time);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn datetime_output_survives_json(
        words in prop::collection::vec(prop::sample::select(&WORDS[..]), 0..8),
        anchor in anchor(),
    ) {
        let text = words.join(" ");
        let out = extractor(UnmatchedPolicy::Leftover)
            .extract_datetime(&text, Some(anchor))
            .unwrap();

        let json = serde_json::to_string(&out).unwrap();
        let back: DateTimeOutput = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, out);
    }
}
