// tests/extract_fallback.rs
use creator_scrape::{
    config::options::ExtractOptions,
    extract::Extractor,
    extract_usernames,
};

#[test]
fn noisy_stat_line_keeps_only_the_handle() {
    let ex = extract_usernames("@shwa2021 Health 5.9K Male 40.4K $1,262.34 shwa2021");
    assert_eq!(ex.usernames, vec!["shwa2021"]);
    assert_eq!(ex.debug_trace, vec![
        "Found 1 non-empty lines",
        "Strategy 1 (PPS) returned 0 valid matches. Falling back to regex.",
        "Regex found 8 raw matches",
        "Strategy 2 (Regex) Final: 2 matches",
    ]);
}

#[test]
fn final_count_is_taken_before_dedup() {
    let ex = extract_usernames("@maker_one @maker_one @maker_two");
    assert_eq!(ex.usernames, vec!["maker_one", "maker_two"]);
    assert_eq!(ex.debug_trace.last().map(String::as_str), Some("Strategy 2 (Regex) Final: 3 matches"));
}

#[test]
fn denylist_is_case_insensitive_and_exact() {
    let ex = extract_usernames("BEAUTY beauty_queen Revenue views2");
    assert_eq!(ex.usernames, vec!["beauty_queen", "views2"]);
}

#[test]
fn dotted_names_and_leading_digits() {
    let ex = extract_usernames("@jane.doe 2fast4you 12.5k 300 1.4KK");
    assert_eq!(ex.usernames, vec!["1.4KK", "2fast4you", "jane.doe"]);
}

#[test]
fn extra_deny_words_apply_to_fallback_only() {
    let opts = ExtractOptions::default().with_denied(["brandshop"]);
    let extractor = Extractor::new(&opts);

    let ex = extractor.extract("BrandShop @real_creator");
    assert_eq!(ex.usernames, vec!["real_creator"]);

    // anchor candidates are not run through the denylist
    let ex = extractor.extract("brandshop\nBrand Shop\nPPS: 4.0/5.0");
    assert_eq!(ex.usernames, vec!["brandshop"]);
}

#[test]
fn rejection_tracing_is_opt_in_and_output_neutral() {
    let text = "@shwa2021 Health 5.9K";
    let quiet = extract_usernames(text);

    let opts = ExtractOptions::default().with_rejection_trace(true);
    let loud = Extractor::new(&opts).extract(text);

    assert_eq!(quiet.usernames, loud.usernames);
    assert!(loud.debug_trace.len() > quiet.debug_trace.len());
    assert!(loud.debug_trace.contains(&String::from("Token '5.9K' rejected (looks like a number)")));
}
