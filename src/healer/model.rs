//! Data model for the rename-healing engine.
//!
//! Plain `Clone + Debug` structs, mirroring how `oc_diagdoc` shapes its
//! report types — `Serialize` is added to everything that can reach the
//! CLI's `--format json` output.

use serde::Serialize;
use std::path::PathBuf;

/// The syntactic kind of a Markdown link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    Inline,
    Image,
    ReferenceDef,
    Autolink,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Inline => "inline",
            Self::Image => "image",
            Self::ReferenceDef => "reference-def",
            Self::Autolink => "autolink",
        };
        write!(f, "{}", s)
    }
}

/// A single Markdown link extracted from a file (C1's output unit).
///
/// `destination` retains the author's original textual form (`./`, extension
/// presence, leading `/`); resolution and rewriting happen downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub kind: LinkKind,
    pub destination: String,
    pub fragment: Option<String>,
    pub source_file: PathBuf,
    pub file_line: usize,
    pub byte_offset: usize,
}

impl LinkRef {
    /// Destination with its fragment re-appended, as it appeared in the file.
    pub fn full_target(&self) -> String {
        match &self.fragment {
            Some(frag) => format!("{}#{}", self.destination, frag),
            None => self.destination.clone(),
        }
    }
}

/// A link whose destination does not resolve to an existing file (C3's output).
#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    pub source_file: PathBuf,
    pub line_number: usize,
    pub target: String,
    pub fragment: Option<String>,
    pub link_type: LinkKind,
}

/// Where a `RenameMapping` was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RenameSource {
    Fixer,
    GitHistory,
    GitUncommitted,
}

/// A single file rename, `oldAbs -> newAbs`, carrying where it was observed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenameMapping {
    pub old_abs: PathBuf,
    pub new_abs: PathBuf,
    pub source: RenameSource,
}

/// One link-rewrite performed during a successful heal.
#[derive(Debug, Clone, Serialize)]
pub struct LinkUpdate {
    pub source_file: PathBuf,
    pub line_number: usize,
    pub old_target: String,
    pub new_target: String,
}

/// A broken link the orchestrator deliberately left unhealed.
#[derive(Debug, Clone, Serialize)]
pub struct HealSkipped {
    pub source_file: PathBuf,
    pub line_number: usize,
    pub target: String,
    pub reason: String,
    pub candidates: Vec<String>,
}

/// Accumulator mutated by one `Fix` invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FixResult {
    pub files_renamed: usize,
    pub links_updated: Vec<LinkUpdate>,
    pub broken_links: Vec<BrokenLink>,
    pub heal_skipped: Vec<HealSkipped>,
    pub errors: Vec<String>,
}

impl FixResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every broken link matching `(source_file, old_target)` — called
    /// after a successful heal transaction so the result reflects reality.
    pub fn prune_healed(&mut self, source_file: &std::path::Path, old_target: &str) {
        self.broken_links
            .retain(|b| !(b.source_file == source_file && b.target == old_target));
    }
}
