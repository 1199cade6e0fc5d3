//! Core types for parsed email bodies

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous block of an email body sharing a single classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Fragment {
    lines: Vec<String>,
    quoted: bool,
    signature: bool,
    forwarded: bool,
    hidden: bool,
}

impl Fragment {
    pub(crate) const fn new(lines: Vec<String>, quoted: bool, signature: bool, forwarded: bool) -> Self {
        Self {
            lines,
            quoted,
            signature,
            forwarded,
            hidden: false,
        }
    }

    pub(crate) const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Raw lines in reading order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with `\n`
    #[must_use]
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Part of a quoted prior message, including the header introducing it
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// A sign-off block
    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    /// A forwarded message, starting at its delimiter line
    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        self.forwarded
    }

    /// Noise to leave out of the reply-only view
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// True when no line has visible characters
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content())
    }
}

/// A parsed email body: fragments in top-to-bottom order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    pub(crate) const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The whole body, line endings normalized to `\n`
    #[must_use]
    pub fn full_text(&self) -> String {
        join_lines(self.fragments.iter())
    }

    /// Only the fragments that are not hidden, without leading or trailing
    /// blank lines
    #[must_use]
    pub fn visible_text(&self) -> String {
        let lines: Vec<&str> = self
            .fragments
            .iter()
            .filter(|f| !f.hidden)
            .flat_map(|f| f.lines.iter().map(String::as_str))
            .collect();

        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());
        match (start, end) {
            (Some(start), Some(end)) => lines[start..=end].join("\n"),
            _ => String::new(),
        }
    }

    /// Text of every quoted fragment, in order
    #[must_use]
    pub fn quoted_text(&self) -> String {
        join_lines(self.fragments.iter().filter(|f| f.quoted))
    }

    /// The first sign-off block, if any
    #[must_use]
    pub fn signature(&self) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.signature)
    }
}

fn join_lines<'a>(fragments: impl Iterator<Item = &'a Fragment>) -> String {
    fragments
        .flat_map(|f| f.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visible_text())
    }
}

impl<'a> IntoIterator for &'a Email {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
