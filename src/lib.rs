// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Parser
//!
//! Splits a plain-text email body into the text the author actually wrote
//! and the noise around it: quoted prior messages, sign-offs and
//! forwarded blocks.
//!
//! # Features
//!
//! - Ordered fragments tagged quoted, signature, forwarded and hidden
//! - Quote headers wrapped over several lines
//! - Mobile sign-offs ("Sent from my iPhone") without eating real sentences
//! - Lossless full-text rendering and a reply-only rendering
//! - Extra patterns from configuration
//!
//! # Example
//!
//! ```rust
//! use email_reply::parse;
//!
//! let email = parse("Sounds good!\n\nOn Jan 1, 2020, Bob wrote:\n> Lunch?");
//!
//! assert_eq!(email.len(), 2);
//! assert!(email.fragments()[1].is_quoted());
//! assert_eq!(email.visible_text(), "Sounds good!");
//! ```

mod classify;
mod config;
mod error;
mod parser;
mod patterns;
mod types;

pub use classify::{LineClassifier, LineKind};
pub use config::{DEFAULT_MAX_HEADER_LINES, PatternConfig};
pub use error::{Error, Result};
pub use parser::{Parser, parse, parse_reply};
pub use patterns::{Matcher, PatternKind, PatternSet};
pub use types::*;
