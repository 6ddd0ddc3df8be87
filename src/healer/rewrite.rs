//! C6: link-target rewriter.
//!
//! Computes the textual replacement for a link destination after a rename,
//! preserving the author's stylistic choices — grounded on the pack's
//! `refactor-rewrite.rs` `compute_replacement`, reworked around Hugo's
//! site-absolute/relative link duality instead of plain import paths.

use std::path::{Path, PathBuf};

use super::detect::is_external;
use super::resolve::{find_content_root, split_fragment};

/// The computed rewrite for one link occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub new_target: String,
    pub changed: bool,
}

fn relative_to(base: &Path, target: &Path) -> PathBuf {
    pathdiff(target, base)
}

/// Minimal `..`/descend path-diff, no filesystem access — `base` and
/// `target` are both assumed already-cleaned absolute paths.
fn pathdiff(target: &Path, base: &Path) -> PathBuf {
    let target_components: Vec<_> = target.components().collect();
    let base_components: Vec<_> = base.components().collect();

    let common = target_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_components.len() {
        out.push("..");
    }
    for component in &target_components[common..] {
        out.push(component.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

fn strip_markdown_ext_str(path: &str) -> String {
    for ext in [".md", ".markdown"] {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped.to_string();
        }
    }
    path.to_string()
}

fn has_markdown_ext(target: &str) -> bool {
    let lower = target.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

/// Compute the new textual destination a link should carry after
/// `old_abs -> new_abs` (spec.md §4.6).
///
/// `source_file` is the file containing the link; `original_target` is its
/// destination exactly as authored (fragment included).
pub fn rewrite_target(
    source_file: &Path,
    original_target: &str,
    new_abs: &Path,
) -> Option<Rewrite> {
    let (path_part, fragment) = split_fragment(original_target);

    if path_part.is_empty() || is_external(path_part) {
        return Some(Rewrite { new_target: original_target.to_string(), changed: false });
    }

    let rewritten_path = if let Some(_rest) = path_part.strip_prefix('/') {
        let content_root = find_content_root(source_file)?;
        let relative = relative_to(&content_root, new_abs);
        format!("/{}", normalize_slashes(&relative))
    } else {
        let base = source_file.parent().unwrap_or_else(|| Path::new(""));
        let relative = relative_to(base, new_abs);
        let mut text = normalize_slashes(&relative);
        if path_part.starts_with("./") && !text.starts_with("..") {
            text = format!("./{text}");
        }
        text
    };

    let final_path = if !has_markdown_ext(path_part) {
        strip_markdown_ext_str(&rewritten_path)
    } else {
        rewritten_path
    };

    let new_target = match fragment {
        Some(frag) => format!("{final_path}#{frag}"),
        None => final_path,
    };

    let changed = new_target != original_target;
    Some(Rewrite { new_target, changed })
}

fn normalize_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
