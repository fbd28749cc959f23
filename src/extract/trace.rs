// src/extract/trace.rs

/// Append-only record of every decision an extraction makes, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugTrace(Vec<String>);

impl DebugTrace {
    pub fn new() -> Self { Self(Vec::new()) }

    #[inline]
    pub fn push(&mut self, line: String) { self.0.push(line); }

    pub fn lines(&self) -> &[String] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn into_lines(self) -> Vec<String> { self.0 }
}
