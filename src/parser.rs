//! Fragment construction and visibility

use crate::classify::{LineClassifier, LineKind};
use crate::config::PatternConfig;
use crate::error::Result;
use crate::patterns::PatternSet;
use crate::types::{Email, Fragment};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(Parser::new);

/// Parse a plain-text email body with the built-in patterns
#[must_use]
pub fn parse(text: &str) -> Email {
    DEFAULT_PARSER.parse(text)
}

/// Only the text the author wrote: quoted history, signatures and
/// surrounding blank lines removed
#[must_use]
pub fn parse_reply(text: &str) -> String {
    parse(text).visible_text()
}

/// Splits email bodies into fragments using a fixed [`PatternSet`]
#[derive(Debug, Clone, Default)]
pub struct Parser {
    patterns: PatternSet,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_patterns(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        Ok(Self::with_patterns(PatternSet::from_config(config)?))
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Parse a plain-text body into fragments
    ///
    /// Any input is accepted. An empty body gives an empty [`Email`].
    #[must_use]
    pub fn parse(&self, text: &str) -> Email {
        let body = normalize_line_endings(text);
        if body.is_empty() {
            return Email::default();
        }

        let lines: Vec<&str> = body.split('\n').collect();
        let kinds = LineClassifier::new(&self.patterns).classify(&lines);

        // Bottom-up, so quote headers and sign-off markers see the block
        // they introduce before deciding where it ends.
        let mut builder = FragmentBuilder::default();
        for (line, kind) in lines.iter().zip(kinds).rev() {
            builder.push(line, kind);
        }

        let mut fragments = builder.finish();
        mark_hidden(&mut fragments);

        debug!(
            "Parsed body: {} lines, {} fragments, {} hidden",
            lines.len(),
            fragments.len(),
            fragments.iter().filter(|f| f.is_hidden()).count()
        );

        Email::new(fragments)
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Plain,
    Quoted,
    Signature,
    Forwarded,
}

#[derive(Debug)]
struct OpenFragment {
    block: Block,
    // bottom-up
    lines: Vec<String>,
}

impl OpenFragment {
    fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Accumulates lines fed in reverse order into finished fragments
#[derive(Debug, Default)]
struct FragmentBuilder {
    open: Option<OpenFragment>,
    done: Vec<Fragment>,
    // kind of the line pushed just before, i.e. the one below
    below: Option<LineKind>,
}

impl FragmentBuilder {
    fn push(&mut self, line: &str, kind: LineKind) {
        let open = self.open.as_ref().map(|f| f.block);
        let open_blank = self.open.as_ref().is_some_and(OpenFragment::is_blank);

        match (kind, open) {
            // A sign-off block ends at the paragraph break above it
            (LineKind::Blank, Some(Block::Signature)) => {
                self.append(line);
                self.close();
            }
            (LineKind::Blank, Some(_)) | (LineKind::Plain, Some(Block::Plain)) => {
                self.append(line);
            }
            (LineKind::Blank | LineKind::Plain, None) => self.start(line, Block::Plain),
            // "Thanks," sitting right on top of the marker
            (LineKind::Plain, Some(Block::Signature))
                if self.below == Some(LineKind::Signature) && is_valediction(line) =>
            {
                self.append(line);
            }
            (LineKind::Plain, Some(_)) => {
                self.close();
                self.start(line, Block::Plain);
            }

            // The header labels the quote below it
            (LineKind::QuoteMarker | LineKind::QuoteHeader, Some(Block::Quoted)) => self.append(line),
            // Trailing blank lines go with the quote they follow
            (LineKind::QuoteMarker | LineKind::QuoteHeader, Some(Block::Plain)) if open_blank => {
                self.relabel(Block::Quoted);
                self.append(line);
            }
            (LineKind::QuoteMarker | LineKind::QuoteHeader, _) => {
                self.close();
                self.start(line, Block::Quoted);
            }

            (LineKind::Signature, Some(Block::Plain | Block::Signature)) => {
                self.relabel(Block::Signature);
                self.append(line);
            }
            (LineKind::Signature, _) => {
                self.close();
                self.start(line, Block::Signature);
            }

            (LineKind::Separator, Some(Block::Plain)) => {
                self.relabel(Block::Signature);
                self.append(line);
                self.close();
            }
            (LineKind::Separator, _) => {
                self.close();
                self.start(line, Block::Signature);
                self.close();
            }

            // The delimiter heads the forwarded content below it
            (LineKind::Forwarded, Some(Block::Plain | Block::Quoted)) => {
                self.relabel(Block::Forwarded);
                self.append(line);
                self.close();
            }
            (LineKind::Forwarded, _) => {
                self.close();
                self.start(line, Block::Forwarded);
                self.close();
            }
        }

        self.below = Some(kind);
    }

    fn start(&mut self, line: &str, block: Block) {
        self.open = Some(OpenFragment {
            block,
            lines: vec![line.to_string()],
        });
    }

    fn append(&mut self, line: &str) {
        if let Some(open) = self.open.as_mut() {
            open.lines.push(line.to_string());
        }
    }

    fn relabel(&mut self, block: Block) {
        if let Some(open) = self.open.as_mut() {
            open.block = block;
        }
    }

    fn close(&mut self) {
        if let Some(OpenFragment { block, mut lines }) = self.open.take() {
            lines.reverse();
            self.done.push(Fragment::new(
                lines,
                block == Block::Quoted,
                block == Block::Signature,
                block == Block::Forwarded,
            ));
        }
    }

    /// Close the last fragment and return all of them top to bottom
    fn finish(mut self) -> Vec<Fragment> {
        self.close();
        self.done.reverse();
        self.done
    }
}

/// A short closing line such as "Thanks," or "Best regards,"
fn is_valediction(line: &str) -> bool {
    let line = line.trim();
    line.ends_with(',') && line.split_whitespace().count() <= 3
}

/// Hide quoted, signature and blank fragments once real content has been
/// seen. Leading noise stays visible; forwarded blocks are never noise.
fn mark_hidden(fragments: &mut [Fragment]) {
    let mut found_visible = false;

    for fragment in fragments {
        let noise = !fragment.is_forwarded()
            && (fragment.is_quoted() || fragment.is_signature() || fragment.is_blank());

        if !found_visible && !noise {
            found_visible = true;
        }
        fragment.set_hidden(found_visible && noise);
    }
}
