//! Recognizer rules for quote headers, sign-offs, separators and forwards

use crate::config::PatternConfig;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Category of a line recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    QuoteHeader,
    Forwarded,
    Separator,
    Signature,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QuoteHeader => "quote header",
            Self::Forwarded => "forwarded",
            Self::Separator => "separator",
            Self::Signature => "signature",
        };
        f.write_str(name)
    }
}

const QUOTE_HEADERS: &[(&str, &str)] = &[
    // "On Tue, 2011-03-01 at 18:02 +0530, Someone wrote:", Yahoo prefixes it with "---"
    ("on_wrote", r"(?i)^(?:-+\s*)?On\s.+?wrote\s*:$"),
    // Gmail in some locales: "2013/3/1 Someone <someone@example.com>"
    (
        "gmail_dated",
        r"^\d{4}/\d{1,2}/\d{1,2}\s.+<[^<>\s]+@[^<>\s]+>:?$",
    ),
];

const FORWARDED: &[(&str, &str)] = &[
    ("forwarded_message", r"(?i)^-+\s*Forwarded message\s*-+$"),
    ("begin_forwarded", r"(?i)^Begin forwarded message:$"),
];

const SEPARATORS: &[(&str, &str)] = &[("underscore_rule", r"^_{8,}$")];

const SIGNATURES: &[(&str, &str)] = &[
    ("dash_delimiter", r"^--"),
    ("underscore_delimiter", r"^__"),
    ("dash_name", r"^-\w"),
    // Anchored at both ends so "Sent from my desk, ..." stays content
    ("sent_from_device", r"^Sent from my(?:\s+\w+){1,3}$"),
];

static BUILTIN: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_config(&PatternConfig::default()).expect("built-in patterns compile")
});

/// A named, compiled line recognizer
#[derive(Debug, Clone)]
pub struct Matcher {
    kind: PatternKind,
    name: String,
    regex: Regex,
}

impl Matcher {
    /// Compile a recognizer
    pub fn new(kind: PatternKind, name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            kind,
            name: name.clone(),
            source,
        })?;
        Ok(Self { kind, name, regex })
    }

    /// Whether `line`, with surrounding whitespace trimmed, matches
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line.trim())
    }

    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source regular expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Frozen collection of line recognizers
///
/// Built once and shared by reference or cheap clone; nothing mutates it
/// after construction.
#[derive(Debug, Clone)]
pub struct PatternSet {
    quote_markers: Vec<char>,
    quote_headers: Vec<Matcher>,
    forwarded: Vec<Matcher>,
    separators: Vec<Matcher>,
    signatures: Vec<Matcher>,
    max_header_lines: usize,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl PatternSet {
    /// The built-in rules, compiled on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Compile a pattern set from configuration
    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        if config.max_header_lines == 0 {
            return Err(Error::InvalidConfig(
                "max_header_lines must be at least 1".into(),
            ));
        }

        let mut quote_markers = Vec::new();
        if config.builtin {
            quote_markers.push('>');
        }
        for &marker in &config.quote_markers {
            if marker.is_whitespace() {
                return Err(Error::InvalidConfig(format!(
                    "quote marker {marker:?} is whitespace"
                )));
            }
            if !quote_markers.contains(&marker) {
                quote_markers.push(marker);
            }
        }

        let set = Self {
            quote_markers,
            quote_headers: compile(
                PatternKind::QuoteHeader,
                config.builtin,
                QUOTE_HEADERS,
                &config.quote_headers,
            )?,
            forwarded: compile(
                PatternKind::Forwarded,
                config.builtin,
                FORWARDED,
                &config.forwarded,
            )?,
            separators: compile(
                PatternKind::Separator,
                config.builtin,
                SEPARATORS,
                &config.separators,
            )?,
            signatures: compile(
                PatternKind::Signature,
                config.builtin,
                SIGNATURES,
                &config.signatures,
            )?,
            max_header_lines: config.max_header_lines,
        };

        debug!(
            "Compiled pattern set: {} quote headers, {} forwarded, {} separators, {} signatures",
            set.quote_headers.len(),
            set.forwarded.len(),
            set.separators.len(),
            set.signatures.len()
        );

        Ok(set)
    }

    /// Whether the line opens with a quote glyph after leading whitespace
    #[must_use]
    pub fn is_quote_marker(&self, line: &str) -> bool {
        line.trim_start()
            .chars()
            .next()
            .is_some_and(|c| self.quote_markers.contains(&c))
    }

    #[must_use]
    pub fn is_quote_header(&self, line: &str) -> bool {
        any_match(&self.quote_headers, line)
    }

    #[must_use]
    pub fn is_forwarded(&self, line: &str) -> bool {
        any_match(&self.forwarded, line)
    }

    #[must_use]
    pub fn is_separator(&self, line: &str) -> bool {
        any_match(&self.separators, line)
    }

    #[must_use]
    pub fn is_signature(&self, line: &str) -> bool {
        any_match(&self.signatures, line)
    }

    /// Recognizers of one category, in matching order
    #[must_use]
    pub fn matchers(&self, kind: PatternKind) -> &[Matcher] {
        match kind {
            PatternKind::QuoteHeader => &self.quote_headers,
            PatternKind::Forwarded => &self.forwarded,
            PatternKind::Separator => &self.separators,
            PatternKind::Signature => &self.signatures,
        }
    }

    #[must_use]
    pub fn quote_markers(&self) -> &[char] {
        &self.quote_markers
    }

    /// How many physical lines a wrapped quote header may span
    #[must_use]
    pub const fn max_header_lines(&self) -> usize {
        self.max_header_lines
    }
}

fn any_match(matchers: &[Matcher], line: &str) -> bool {
    matchers.iter().any(|m| m.matches(line))
}

fn compile(
    kind: PatternKind,
    builtin: bool,
    table: &[(&str, &str)],
    extra: &[String],
) -> Result<Vec<Matcher>> {
    let table = if builtin { table } else { &[] };

    let defaults = table
        .iter()
        .map(|(name, pattern)| Matcher::new(kind, *name, pattern));

    let custom = extra
        .iter()
        .enumerate()
        .map(|(i, pattern)| Matcher::new(kind, format!("custom_{i}"), pattern));

    defaults.chain(custom).collect()
}
