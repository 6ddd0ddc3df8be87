//! Filename conventions: Markdown files are expected to be lowercase
//! kebab-case, matching Hugo's URL-from-filename convention.

use std::path::{Path, PathBuf};

/// A suggested rename to satisfy the filename convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSuggestion {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

fn kebab_case_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut prev_was_sep = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_was_sep = false;
        } else if !prev_was_sep {
            out.push('-');
            prev_was_sep = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Suggest a convention-compliant rename for `path`, or `None` if it already
/// conforms. Only the file stem is evaluated; the extension is preserved.
pub fn suggest_rename(path: &Path) -> Option<RenameSuggestion> {
    let stem = path.file_stem()?.to_str()?;
    if stem.eq_ignore_ascii_case("README") {
        return None; // README keeps its conventional casing
    }

    let desired = kebab_case_stem(stem);
    if desired.is_empty() || desired == stem {
        return None;
    }

    let ext = path.extension().and_then(|e| e.to_str());
    let new_name = match ext {
        Some(ext) => format!("{desired}.{ext}"),
        None => desired,
    };
    let new_path = path.with_file_name(new_name);

    Some(RenameSuggestion { old_path: path.to_path_buf(), new_path })
}
