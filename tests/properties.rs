//! Property-based tests for extraction and metric parsing
//!
//! These hold for any input:
//! - extraction is deterministic (usernames and trace)
//! - usernames come back sorted, unique, and at least three characters long
//! - a valid anchored candidate always wins over the fallback

use proptest::prelude::*;
use creator_scrape::{extract_usernames, parse_metric};

/// Text shaped like pasted cards: words, stats, anchors, blank lines
fn card_text_strategy() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "@?[a-zA-Z0-9_.]{1,12}",
        "[A-Za-z][A-Za-z ]{0,15}",
        "\\$?[0-9]{1,3}(\\.[0-9])?[KMBkmb%]?",
        Just(String::from("PPS: 4.1/5.0")),
        Just(String::from("pps: 3.0/5.0")),
        Just(String::from("Previously invited")),
        Just(String::new()),
        "[ \\t]{0,3}",
    ];
    prop::collection::vec(line, 0..30).prop_map(|lines| lines.join("\n"))
}

fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{2,15}"
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in card_text_strategy()) {
        let a = extract_usernames(&text);
        let b = extract_usernames(&text);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn arbitrary_text_never_breaks_invariants(text in "\\PC{0,200}") {
        let ex = extract_usernames(&text);
        prop_assert!(!ex.debug_trace.is_empty());
        prop_assert!(ex.usernames.windows(2).all(|w| w[0] < w[1]));
        for name in &ex.usernames {
            prop_assert!(name.chars().count() >= 3, "short username {:?}", name);
        }
    }

    #[test]
    fn output_is_already_sorted_and_unique(text in card_text_strategy()) {
        let ex = extract_usernames(&text);
        let mut again = ex.usernames.clone();
        again.sort();
        again.dedup();
        prop_assert_eq!(again, ex.usernames);
    }

    #[test]
    fn anchored_candidate_short_circuits(
        name in username_strategy(),
        display in "[A-Za-z][A-Za-z ]{0,19}",
        noise in "[A-Za-z0-9 ]{0,40}",
    ) {
        let text = format!("{name}\n{display}\nPPS: 4.0/5.0\n{noise}");
        let ex = extract_usernames(&text);
        prop_assert_eq!(ex.usernames, vec![name]);
        prop_assert!(!ex.debug_trace.iter().any(|l| l.starts_with("Regex found")));
    }

    #[test]
    fn integer_magnitudes_scale_exactly(n in 0u32..1_000_000, unit in 0usize..4) {
        let (suffix, mult) = [("", 1.0), ("K", 1e3), ("m", 1e6), ("B", 1e9)][unit];
        prop_assert_eq!(parse_metric(format!("{n}{suffix}").as_str()), n as f64 * mult);
    }
}
