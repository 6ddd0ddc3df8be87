//! Discovery of Markdown files under a docs root.
//!
//! Walks the tree with `walkdir`, the same crate `oc_diagdoc`'s own
//! `core::files::get_all_md_files` uses, honoring the ignore rules spec.md
//! §6 hands the broken-link detector: dot-prefixed directories/files are
//! skipped entirely, and `README.md` is ignored case-insensitively.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{OcError, OcResult};

fn is_dot_entry(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
}

fn is_ignored_filename(name: &str) -> bool {
    name.eq_ignore_ascii_case("README.md")
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Enumerate every non-ignored Markdown file under `root` (file or directory).
///
/// A single file argument is returned as-is (if it qualifies); a directory
/// is walked recursively, pruning dot-prefixed subtrees before descending
/// into them so hidden directories never get scanned.
pub fn discover_markdown_files(root: &Path) -> OcResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(OcError::DirectoryNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(if has_markdown_extension(root) { vec![root.to_path_buf()] } else { Vec::new() });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0 || !is_dot_entry(e)
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_markdown_extension(path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if is_ignored_filename(name) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Enumerate every non-Markdown asset file under `root` (images, etc.),
/// honoring the same dot-directory exclusion as `discover_markdown_files`.
/// Consumed by the broader rule engine, not by the rename-healing core.
pub fn discover_asset_files(root: &Path) -> OcResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(OcError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0 || !is_dot_entry(e)
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if has_markdown_extension(entry.path()) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }

    files.sort();
    Ok(files)
}
