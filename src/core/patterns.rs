//! Precompiled regex patterns, compiled once via `once_cell::sync::Lazy`.
//!
//! The rename-healing core parses links through a real Markdown parser
//! (`healer::extract`), not regex — this module only keeps the one pattern
//! the frontmatter rule still needs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Captures `last_updated: <value>` from a frontmatter block.
pub static RE_LAST_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"last_updated:\s*["']?([^"'\n]+)["']?"#).unwrap());
