// src/extract/mod.rs
//! # Username extraction
//!
//! Recovers creator usernames from text pasted out of the outreach UI, where
//! each record is a loose stack of lines (username, display name, a `PPS:`
//! score line, category tags, follower and revenue figures...).
//!
//! Two strategies run in a fixed order and the first one that finds anything
//! wins:
//!
//! 1. [`anchor`] looks for `PPS:` score lines and takes the line two above
//!    each one.
//! 2. [`tokens`] splits the whole text into word-ish tokens and filters out
//!    labels, stats and currency.
//!
//! Every decision is written to a [`DebugTrace`] that travels back to the
//! caller with the result, so a wrong answer can be explained from the output
//! alone. Identical input and options always give an identical trace.
//!
//! ```text
//! text ─▶ clean_lines ─▶ anchor ──found──▶ sort+dedup ─▶ Extraction
//!                          │ empty
//!                          ▼
//!                        tokens ─────────▶ sort+dedup ─▶ Extraction
//! ```
use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::config::consts::{DENYLIST, NO_TEXT};
use crate::config::options::ExtractOptions;
use crate::core::sanitize::clean_lines;

pub mod anchor;
pub mod tokens;
pub mod trace;

pub use trace::DebugTrace;

/// Result of one extraction: sorted unique usernames plus the decision log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub usernames: Vec<String>,
    pub debug_trace: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool { self.usernames.is_empty() }
}

/// What every strategy gets to look at.
pub struct Input<'a> {
    /// The text exactly as pasted
    pub text: &'a str,
    /// Trimmed, non-empty lines of `text`
    pub lines: Vec<&'a str>,
}

/// Compiled extraction settings shared by all strategies.
#[derive(Clone, Debug)]
pub struct Rules {
    /// Lower-cased noise words
    pub denylist: HashSet<String>,
    pub trace_rejections: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules::from_options(&ExtractOptions::default())
    }
}

impl Rules {
    pub fn from_options(opts: &ExtractOptions) -> Self {
        let denylist = DENYLIST
            .iter()
            .map(|w| w.to_string())
            .chain(opts.extra_denylist.iter().map(|w| w.trim().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { denylist, trace_rejections: opts.trace_rejections }
    }

    pub fn is_denied(&self, token: &str) -> bool {
        self.denylist.contains(&token.to_lowercase())
    }
}

pub trait Strategy: Send + Sync + 'static {
    /// Name used in trace lines, e.g. "Strategy 1 (PPS)".
    fn label(&self) -> &'static str;

    /// Short method name used when falling back to this strategy.
    fn method(&self) -> &'static str;

    /// Return every accepted candidate in discovery order (duplicates allowed).
    /// Writes its own per-candidate and summary lines to `trace`.
    fn attempt(&self, input: &Input<'_>, rules: &Rules, trace: &mut DebugTrace) -> Vec<String>;
}

/// Strategies in priority order.
pub static STRATEGIES: &[&'static dyn Strategy] = &[
    &anchor::STRATEGY,
    &tokens::STRATEGY,
];

static DEFAULT: Lazy<Extractor> = Lazy::new(Extractor::default);

/// Extract usernames with the built-in configuration.
pub fn extract_usernames(text: &str) -> Extraction {
    DEFAULT.extract(text)
}

#[derive(Clone, Debug, Default)]
pub struct Extractor {
    rules: Rules,
}

impl Extractor {
    pub fn new(opts: &ExtractOptions) -> Self {
        Self { rules: Rules::from_options(opts) }
    }

    pub fn extract(&self, text: &str) -> Extraction {
        let mut trace = DebugTrace::new();

        if text.is_empty() {
            note!(trace, "{}", NO_TEXT);
            return Extraction { usernames: Vec::new(), debug_trace: trace.into_lines() };
        }

        let input = Input { text, lines: clean_lines(text) };
        note!(trace, "Found {} non-empty lines", input.lines.len());

        let mut found = Vec::new();
        for (i, strategy) in STRATEGIES.iter().enumerate() {
            found = strategy.attempt(&input, &self.rules, &mut trace);
            if !found.is_empty() {
                logd!("Extract: {} produced {} candidate(s)", strategy.label(), found.len());
                break;
            }
            if let Some(next) = STRATEGIES.get(i + 1) {
                note!(
                    trace,
                    "{} returned 0 valid matches. Falling back to {}.",
                    strategy.label(),
                    next.method()
                );
            }
        }

        let usernames = sort_unique(found);
        logf!("Extract: {} username(s) from {} byte(s)", usernames.len(), text.len());
        Extraction { usernames, debug_trace: trace.into_lines() }
    }
}

/// Byte-order sort, then drop exact duplicates.
pub fn sort_unique(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}
