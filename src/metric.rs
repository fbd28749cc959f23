// src/metric.rs
//! Best-effort numeric parsing for the stat columns the outreach tools export:
//! `"1.2M"`, `"$40.4K"`, `"4.6%"`, `"1,262.34"`, plain numbers, or nothing.
//!
//! The unit letter is found by *containment*, not as a suffix: `K` wins over
//! `M`, which wins over `B`, and every occurrence of the winning letter is
//! removed before parsing. So `"1.5MB"` reads as `"1.5B"` × 1e6 and fails.
//! Anything unparseable becomes `0.0`; use [`try_parse_metric`] when a real
//! zero has to be told apart from garbage.
use crate::core::sanitize::trim_ws;

const MULTIPLIERS: [(char, f64); 3] = [
    ('K', 1_000.0),
    ('M', 1_000_000.0),
    ('B', 1_000_000_000.0),
];

/// One raw cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricInput<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for MetricInput<'a> {
    fn from(s: &'a str) -> Self { MetricInput::Text(s) }
}

impl<'a> From<&'a String> for MetricInput<'a> {
    fn from(s: &'a String) -> Self { MetricInput::Text(s.as_str()) }
}

impl From<f64> for MetricInput<'_> {
    fn from(n: f64) -> Self { MetricInput::Number(n) }
}

impl From<f32> for MetricInput<'_> {
    fn from(n: f32) -> Self { MetricInput::Number(n as f64) }
}

impl From<i64> for MetricInput<'_> {
    fn from(n: i64) -> Self { MetricInput::Number(n as f64) }
}

impl From<i32> for MetricInput<'_> {
    fn from(n: i32) -> Self { MetricInput::Number(n as f64) }
}

impl From<u64> for MetricInput<'_> {
    fn from(n: u64) -> Self { MetricInput::Number(n as f64) }
}

impl From<u32> for MetricInput<'_> {
    fn from(n: u32) -> Self { MetricInput::Number(n as f64) }
}

impl<'a, T: Into<MetricInput<'a>>> From<Option<T>> for MetricInput<'a> {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(MetricInput::Missing)
    }
}

/// Parse one cell; never fails, unparseable input gives `0.0`.
pub fn parse_metric<'a>(value: impl Into<MetricInput<'a>>) -> f64 {
    try_parse_metric(value).unwrap_or(0.0)
}

/// Like [`parse_metric`] but `None` for missing or unparseable input.
pub fn try_parse_metric<'a>(value: impl Into<MetricInput<'a>>) -> Option<f64> {
    match value.into() {
        MetricInput::Missing => None,
        MetricInput::Number(n) if n.is_nan() => None,
        MetricInput::Number(n) => Some(n),
        MetricInput::Text(s) => parse_text(s),
    }
}

fn parse_text(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%'))
        .collect();
    let cleaned = trim_ws(&cleaned);

    let (body, multiplier) = match MULTIPLIERS.iter().find(|(unit, _)| cleaned.contains(*unit)) {
        Some(&(unit, mult)) => (cleaned.replace(unit, ""), mult),
        None => (s!(cleaned), 1.0),
    };

    let n: f64 = without_digit_separators(trim_ws(&body))?.parse().ok()?;
    if n.is_nan() {
        return None;
    }
    Some(n * multiplier)
}

/// Drop `_` between two digits (`1_000`); any other underscore makes the
/// number invalid.
fn without_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s!(s));
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}
