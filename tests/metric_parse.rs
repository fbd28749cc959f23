// tests/metric_parse.rs
use creator_scrape::{parse_metric, try_parse_metric};

#[test]
fn magnitudes_and_currency() {
    assert_eq!(parse_metric("1.2M"), 1_200_000.0);
    assert_eq!(parse_metric("$40.4K"), 40_400.0);
    assert_eq!(parse_metric("4.6%"), 4.6);
    assert_eq!(parse_metric("$1,262.34"), 1262.34);
    assert_eq!(parse_metric(" 2b "), 2_000_000_000.0);
    assert_eq!(parse_metric("1.4k"), 1400.0);
}

#[test]
fn missing_and_garbage_are_zero() {
    assert_eq!(parse_metric(None::<&str>), 0.0);
    assert_eq!(parse_metric("not a number"), 0.0);
    assert_eq!(parse_metric(""), 0.0);
    assert_eq!(parse_metric("1.2.3"), 0.0);
    assert_eq!(parse_metric("$"), 0.0);
}

#[test]
fn numbers_pass_through() {
    assert_eq!(parse_metric(12_i32), 12.0);
    assert_eq!(parse_metric(0.5_f64), 0.5);
    assert_eq!(parse_metric(Some(7_u32)), 7.0);
    assert_eq!(parse_metric(f64::NAN), 0.0);
}

#[test]
fn letter_is_found_anywhere() {
    // K wins over M; every K goes
    assert_eq!(parse_metric("K5"), 5_000.0);
    assert_eq!(parse_metric("1.5MB"), 0.0);
}

#[test]
fn try_parse_tells_zero_from_garbage() {
    assert_eq!(try_parse_metric("0"), Some(0.0));
    assert_eq!(try_parse_metric("n/a"), None);
    assert_eq!(try_parse_metric(None::<&str>), None);
    assert_eq!(try_parse_metric("-3"), Some(-3.0));
}

#[test]
fn digit_group_underscores() {
    assert_eq!(parse_metric("1_000"), 1_000.0);
    assert_eq!(parse_metric("1_2K"), 12_000.0);
    assert_eq!(try_parse_metric("1_"), None);
}
