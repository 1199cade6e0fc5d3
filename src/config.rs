//! Pattern configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default number of physical lines a wrapped quote header may span
pub const DEFAULT_MAX_HEADER_LINES: usize = 3;

/// Declarative description of a [`PatternSet`](crate::PatternSet)
///
/// Extra patterns are regular expressions matched against a line with its
/// surrounding whitespace trimmed.
///
/// ```rust
/// use email_reply::PatternConfig;
///
/// let config = PatternConfig::from_json(r#"{"signatures": ["^Cheers,$"]}"#).unwrap();
/// assert!(config.builtin);
/// assert_eq!(config.signatures, vec!["^Cheers,$".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Include the built-in rule tables
    pub builtin: bool,

    /// Quote glyphs in addition to `>`
    pub quote_markers: Vec<char>,

    /// Extra attribution lines introducing a quoted block
    pub quote_headers: Vec<String>,

    /// Extra sign-off markers
    pub signatures: Vec<String>,

    /// Extra footer rules that start a signature block without absorbing
    /// the text above them
    pub separators: Vec<String>,

    /// Extra forwarded-message delimiters
    pub forwarded: Vec<String>,

    /// How many physical lines a wrapped quote header may span
    pub max_header_lines: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            quote_markers: Vec::new(),
            quote_headers: Vec::new(),
            signatures: Vec::new(),
            separators: Vec::new(),
            forwarded: Vec::new(),
            max_header_lines: DEFAULT_MAX_HEADER_LINES,
        }
    }
}

impl PatternConfig {
    /// Read a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
