//! Per-line classification

use crate::patterns::PatternSet;
use serde::{Deserialize, Serialize};

/// What a single physical line is, as far as fragment boundaries go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with a quote glyph
    QuoteMarker,
    /// Attribution line (or part of a wrapped one) introducing a quote
    QuoteHeader,
    /// Forwarded-message delimiter
    Forwarded,
    /// Footer rule opening a signature block
    Separator,
    /// Sign-off marker
    Signature,
    /// Anything else
    Plain,
}

/// Applies a [`PatternSet`] to lines
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    patterns: &'a PatternSet,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Classify one line on its own
    #[must_use]
    pub fn classify_line(&self, line: &str) -> LineKind {
        let p = self.patterns;
        if line.trim().is_empty() {
            LineKind::Blank
        } else if p.is_quote_marker(line) {
            LineKind::QuoteMarker
        } else if p.is_quote_header(line) {
            LineKind::QuoteHeader
        } else if p.is_forwarded(line) {
            LineKind::Forwarded
        } else if p.is_separator(line) {
            LineKind::Separator
        } else if p.is_signature(line) {
            LineKind::Signature
        } else {
            LineKind::Plain
        }
    }

    /// Classify a whole body, stitching quote headers that were wrapped
    /// over several physical lines.
    ///
    /// ```rust
    /// use email_reply::{LineClassifier, LineKind, PatternSet};
    ///
    /// let lines = ["On Dec 16, 2011, Someone", "<someone@example.com>", "wrote:", "> hi"];
    /// let kinds = LineClassifier::new(PatternSet::builtin()).classify(&lines);
    /// assert_eq!(kinds[..3], [LineKind::QuoteHeader; 3]);
    /// assert_eq!(kinds[3], LineKind::QuoteMarker);
    /// ```
    #[must_use]
    pub fn classify(&self, lines: &[&str]) -> Vec<LineKind> {
        let mut kinds: Vec<LineKind> = lines.iter().map(|l| self.classify_line(l)).collect();

        for end in 0..lines.len() {
            if kinds[end] != LineKind::Plain {
                continue;
            }
            if let Some(start) = self.wrapped_header_start(lines, &kinds, end) {
                kinds[start..=end].fill(LineKind::QuoteHeader);
            }
        }

        kinds
    }

    /// Start of the shortest run of plain lines ending at `end` that reads
    /// as a quote header once joined.
    fn wrapped_header_start(&self, lines: &[&str], kinds: &[LineKind], end: usize) -> Option<usize> {
        let mut joined = lines[end].trim().to_string();

        for span in 2..=self.patterns.max_header_lines() {
            let start = end.checked_sub(span - 1)?;
            if kinds[start] != LineKind::Plain {
                return None;
            }
            joined = format!("{} {joined}", lines[start].trim());
            if self.patterns.is_quote_header(&joined) {
                return Some(start);
            }
        }

        None
    }
}
