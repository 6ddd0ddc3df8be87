//! C3: broken-link detector.

use std::path::Path;

use super::extract::extract_links;
use super::model::BrokenLink;
use super::resolve::{exists_fold, resolve};
use crate::discovery::discover_markdown_files;
use crate::errors::OcResult;

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// External-scheme targets are never candidates for healing or brokenness.
pub fn is_external(target: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|s| target.starts_with(s))
}

/// Hugo shortcode arguments (`{{< ref "x.md" >}}`) look like link targets but
/// aren't Markdown links — the extractor never emits them as `LinkRef`s in
/// the first place, but callers resolving a raw string defensively re-check.
pub fn is_shortcode_argument(target: &str) -> bool {
    target.contains("{{<") || target.contains(">}}")
}

/// Walk `root`, extract links from every discovered Markdown file, and emit a
/// `BrokenLink` for each destination that doesn't resolve to an existing file
/// (spec.md §4.3).
///
/// Per-file scanning has no shared mutable state, so with the `parallel`
/// feature this fans out across `rayon`'s global pool; each file's own
/// findings stay in source order, only the across-file order is unspecified.
pub fn detect_broken_links(root: &Path) -> OcResult<Vec<BrokenLink>> {
    let files = discover_markdown_files(root)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let broken: Vec<BrokenLink> =
            files.par_iter().flat_map(|file| scan_file(file)).collect();
        Ok(broken)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let broken: Vec<BrokenLink> = files.iter().flat_map(|file| scan_file(file)).collect();
        Ok(broken)
    }
}

fn scan_file(file: &Path) -> Vec<BrokenLink> {
    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let mut broken = Vec::new();
    for link in extract_links(file, &content) {
        if link.destination.is_empty() {
            continue; // fragment-only or empty target
        }
        if is_external(&link.destination) || is_shortcode_argument(&link.destination) {
            continue;
        }

        let resolved = resolve(file, &link.destination);
        if !exists_fold(&resolved) {
            broken.push(BrokenLink {
                source_file: file.clone(),
                line_number: link.file_line,
                target: link.destination.clone(),
                fragment: link.fragment.clone(),
                link_type: link.kind,
            });
        }
    }
    broken
}
