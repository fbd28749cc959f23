// src/extract/anchor.rs
//! Strategy 1: positional heuristic around `PPS:` score lines.
//!
//! A creator card pastes as
//!
//! ```text
//! guadalupejaimes      <- username (anchor - 2)
//! Lupita jaimes💜      <- display name
//! PPS: 4.1/5.0         <- anchor
//! Health
//! ...
//! ```
//!
//! Indices count non-empty lines only.
use std::fmt;

use super::{DebugTrace, Input, Rules, Strategy};
use crate::config::consts::{ANCHOR_MARKER, ANCHOR_OFFSET, MIN_USERNAME_LEN};

pub struct AnchorStrategy;
pub static STRATEGY: AnchorStrategy = AnchorStrategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    ContainsSpace,
    TooShort,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ContainsSpace => write!(f, "invalid format: contains space"),
            Rejection::TooShort => {
                write!(f, "invalid format: shorter than {MIN_USERNAME_LEN} characters")
            }
        }
    }
}

#[inline]
pub fn is_anchor(line: &str) -> bool {
    line.to_uppercase().contains(ANCHOR_MARKER)
}

/// Usernames never contain a space and are at least three characters long.
pub fn validate(candidate: &str) -> Result<(), Rejection> {
    if candidate.contains(' ') {
        return Err(Rejection::ContainsSpace);
    }
    if candidate.chars().count() < MIN_USERNAME_LEN {
        return Err(Rejection::TooShort);
    }
    Ok(())
}

impl Strategy for AnchorStrategy {
    fn label(&self) -> &'static str { "Strategy 1 (PPS)" }
    fn method(&self) -> &'static str { "anchor" }

    fn attempt(&self, input: &Input<'_>, _rules: &Rules, trace: &mut DebugTrace) -> Vec<String> {
        let mut accepted = Vec::new();

        for (i, line) in input.lines.iter().enumerate() {
            if !is_anchor(line) { continue; }

            let Some(ix) = i.checked_sub(ANCHOR_OFFSET) else {
                note!(trace, "Line {} PPS found -> No candidate (index < {})", i, ANCHOR_OFFSET);
                continue;
            };

            let candidate = input.lines[ix];
            match validate(candidate) {
                Ok(()) => {
                    note!(trace, "Line {} PPS found -> Accepted candidate '{}'", i, candidate);
                    accepted.push(candidate.to_string());
                }
                Err(why) => {
                    note!(trace, "Line {} PPS found -> Rejected candidate '{}' ({})", i, candidate, why);
                }
            }
        }

        if !accepted.is_empty() {
            note!(trace, "{} Success: {} matches", self.label(), accepted.len());
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sanitize::clean_lines;

    fn run(text: &str) -> (Vec<String>, Vec<String>) {
        let input = Input { text, lines: clean_lines(text) };
        let mut trace = DebugTrace::new();
        let found = STRATEGY.attempt(&input, &Rules::default(), &mut trace);
        (found, trace.into_lines())
    }

    #[test]
    fn anchor_is_case_insensitive() {
        assert!(is_anchor("PPS: 4.1/5.0"));
        assert!(is_anchor("pps: 3.6/5.0"));
        assert!(is_anchor("score Pps:"));
        assert!(!is_anchor("PPS 4.1"));
    }

    #[test]
    fn validate_reasons() {
        assert_eq!(validate("John Smith"), Err(Rejection::ContainsSpace));
        assert_eq!(validate("ab"), Err(Rejection::TooShort));
        assert_eq!(validate("abc"), Ok(()));
        // counted in characters, not bytes
        assert_eq!(validate("é"), Err(Rejection::TooShort));
    }

    #[test]
    fn blank_lines_do_not_shift_indices() {
        let (found, trace) = run("alice_01\n\n   \nDisplay Name\n\nPPS: 4.0/5.0\n");
        assert_eq!(found, vec!["alice_01"]);
        assert_eq!(trace, vec![
            "Line 2 PPS found -> Accepted candidate 'alice_01'",
            "Strategy 1 (PPS) Success: 1 matches",
        ]);
    }

    #[test]
    fn duplicates_are_counted_before_dedup() {
        let text = "shwa2021\nshwa2021\nPPS: 3.6/5.0\nshwa2021\nx\nPPS: 3.6/5.0";
        let (found, trace) = run(text);
        assert_eq!(found, vec!["shwa2021", "shwa2021"]);
        assert_eq!(trace.last().map(String::as_str), Some("Strategy 1 (PPS) Success: 2 matches"));
    }

    #[test]
    fn nothing_accepted_writes_no_summary() {
        let (found, trace) = run("PPS: 1.0/5.0");
        assert!(found.is_empty());
        assert_eq!(trace, vec!["Line 0 PPS found -> No candidate (index < 2)"]);
    }
}
