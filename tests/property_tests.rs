//! Property-based tests for the normalization guarantees of the parser.

use proptest::prelude::*;
use toyota_part_number::{parse, try_parse, try_parse_with_options, ParseOptions};

fn body() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9A-Za-z]{10}", "[0-9A-Za-z]{12}"]
}

fn hyphenate(body: &str) -> String {
    let mut out = format!("{}-{}", &body[..5], &body[5..10]);
    if body.len() > 10 {
        out.push('-');
        out.push_str(&body[10..]);
    }
    out
}

proptest! {
    #[test]
    fn prop_render_is_idempotent(s in body()) {
        let part = parse(&s).unwrap();
        let again = parse(&part.render(false)).unwrap();
        prop_assert_eq!(&again, &part);
        prop_assert_eq!(parse(&part.render(true)).unwrap(), part);
    }

    #[test]
    fn prop_case_insensitive(s in body()) {
        let part = parse(&s).unwrap();
        prop_assert_eq!(&parse(&s.to_uppercase()).unwrap(), &part);
        prop_assert_eq!(&parse(&s.to_lowercase()).unwrap(), &part);
    }

    #[test]
    fn prop_hyphen_insensitive(s in body()) {
        prop_assert_eq!(parse(&hyphenate(&s)).unwrap(), parse(&s).unwrap());
    }

    #[test]
    fn prop_fields_partition_compact_form(s in body()) {
        let part = parse(&s).unwrap();
        let joined = format!("{}{}{}", part.category(), part.usage_code(), part.suffix());
        prop_assert_eq!(joined.as_str(), part.as_compact());
        prop_assert_eq!(part.as_compact(), s.to_ascii_uppercase());
    }

    #[test]
    fn prop_other_lengths_fail(s in "[0-9A-Z]{0,20}") {
        prop_assume!(s.len() != 10 && s.len() != 12);
        prop_assert!(try_parse(&s).is_none());
    }

    #[test]
    fn prop_never_panics(s in any::<String>(), strip in any::<bool>()) {
        let options = ParseOptions::new().with_remove_non_alphanumeric_characters(strip);
        if let Some(part) = try_parse_with_options(&s, options) {
            let compact = part.as_compact();
            prop_assert!(compact.len() == 10 || compact.len() == 12);
            prop_assert!(compact.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn prop_noise_is_stripped(
        s in body(),
        noise in prop::collection::vec(proptest::option::of(prop::sample::select(vec![' ', '*', '.', '#', '\u{0444}', '\u{062F}'])), 12),
    ) {
        let mut noisy = String::new();
        for (ch, extra) in s.chars().zip(noise.iter()) {
            noisy.push(ch);
            if let Some(extra) = extra {
                noisy.push(*extra);
            }
        }

        let expected = parse(&s).unwrap();
        prop_assert_eq!(try_parse_with_options(&noisy, ParseOptions::permissive()), Some(expected));
        if noise.iter().take(s.len()).any(Option::is_some) {
            prop_assert!(try_parse(&noisy).is_none());
        }
    }
}
