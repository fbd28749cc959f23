// src/extract/tokens.rs
//! Strategy 2: tokenize the raw text and drop everything that looks like a
//! label, a stat or money.
//!
//! Filters run in a fixed order and stop at the first failure:
//! length → letters → denylist → symbols → magnitude shorthand.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DebugTrace, Input, Rules, Strategy};
use crate::config::consts::{MAGNITUDE_PATTERN, MIN_USERNAME_LEN, REJECTED_SYMBOLS, TOKEN_PATTERN};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern compiles"));
static MAGNITUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAGNITUDE_PATTERN).expect("magnitude pattern compiles"));

pub struct TokenStrategy;
pub static STRATEGY: TokenStrategy = TokenStrategy;

/// Which filter dropped a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Length,
    NoLetter,
    Denylist,
    Symbol,
    Magnitude,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self {
            Filter::Length => "too short",
            Filter::NoLetter => "no letters",
            Filter::Denylist => "denylisted",
            Filter::Symbol => "contains symbol",
            Filter::Magnitude => "looks like a number",
        };
        f.write_str(why)
    }
}

/// Raw tokens in text order; a leading `@` is not part of the token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

/// `"1.4K"`, `"5.0"`, `"40"`: digits and periods with an optional K/M/B.
pub fn is_magnitude(token: &str) -> bool {
    MAGNITUDE_RE.is_match(token)
}

/// Run the filter chain; `Err` names the first filter that rejected `token`.
pub fn check(token: &str, rules: &Rules) -> Result<(), Filter> {
    if token.chars().count() < MIN_USERNAME_LEN {
        return Err(Filter::Length);
    }
    if !token.chars().any(char::is_alphabetic) {
        return Err(Filter::NoLetter);
    }
    if rules.is_denied(token) {
        return Err(Filter::Denylist);
    }
    if token.contains(REJECTED_SYMBOLS) {
        return Err(Filter::Symbol);
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) && is_magnitude(token) {
        return Err(Filter::Magnitude);
    }
    Ok(())
}

impl Strategy for TokenStrategy {
    fn label(&self) -> &'static str { "Strategy 2 (Regex)" }
    fn method(&self) -> &'static str { "regex" }

    fn attempt(&self, input: &Input<'_>, rules: &Rules, trace: &mut DebugTrace) -> Vec<String> {
        let raw: Vec<&str> = tokenize(input.text).collect();
        note!(trace, "Regex found {} raw matches", raw.len());

        let mut kept = Vec::new();
        for token in raw {
            let token = token.trim();
            match check(token, rules) {
                Ok(()) => kept.push(token.to_string()),
                Err(filter) if rules.trace_rejections => {
                    note!(trace, "Token '{}' rejected ({})", token, filter);
                }
                Err(_) => {}
            }
        }

        note!(trace, "{} Final: {} matches", self.label(), kept.len());
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExtractOptions;

    #[test]
    fn tokenize_drops_at_sign_and_splits_on_symbols() {
        let toks: Vec<&str> = tokenize("@shwa2021 $1,262.34 a.b_c").collect();
        assert_eq!(toks, vec!["shwa2021", "1", "262.34", "a.b_c"]);
    }

    #[test]
    fn non_ascii_letters_split_tokens() {
        let toks: Vec<&str> = tokenize("Lupita jaimes💜").collect();
        assert_eq!(toks, vec!["Lupita", "jaimes"]);
    }

    #[test]
    fn filter_order_reports_first_failure() {
        let rules = Rules::default();
        assert_eq!(check("ab", &rules), Err(Filter::Length));
        assert_eq!(check("262.34", &rules), Err(Filter::NoLetter));
        assert_eq!(check("HEALTH", &rules), Err(Filter::Denylist));
        assert_eq!(check("5.9K", &rules), Err(Filter::Magnitude));
        assert_eq!(check("1.2b", &rules), Err(Filter::Magnitude));
        assert_eq!(check("shwa2021", &rules), Ok(()));
    }

    #[test]
    fn leading_digit_usernames_survive() {
        let rules = Rules::default();
        assert_eq!(check("2fast4you", &rules), Ok(()));
        assert_eq!(check("1.4KK", &rules), Ok(()));
        assert_eq!(check("40s_mom", &rules), Ok(()));
    }

    #[test]
    fn magnitude_shapes() {
        assert!(is_magnitude("40"));
        assert!(is_magnitude("5.0"));
        assert!(is_magnitude("1.4k"));
        assert!(!is_magnitude("1.4KB"));
        assert!(!is_magnitude("K"));
    }

    #[test]
    fn rejection_lines_only_when_asked() {
        let text = "Health shwa2021";
        let input = Input { text, lines: vec![text] };

        let mut quiet = DebugTrace::new();
        STRATEGY.attempt(&input, &Rules::default(), &mut quiet);
        assert_eq!(quiet.len(), 2);

        let loud_rules = Rules::from_options(&ExtractOptions::default().with_rejection_trace(true));
        let mut loud = DebugTrace::new();
        let kept = STRATEGY.attempt(&input, &loud_rules, &mut loud);
        assert_eq!(kept, vec!["shwa2021"]);
        assert_eq!(loud.lines(), [
            "Regex found 2 raw matches",
            "Token 'Health' rejected (denylisted)",
            "Strategy 2 (Regex) Final: 1 matches",
        ]);
    }
}
