//! C2: path resolver.
//!
//! Pure functions over `&Path`/`&str` — no component here ever touches a
//! mutable filesystem state; only `Path::exists`/`read_dir` for lookups.

use std::path::{Component, Path, PathBuf};

/// Split `target` at the first `#` into `(path_part, fragment)`.
pub fn split_fragment(target: &str) -> (&str, Option<&str>) {
    match target.find('#') {
        Some(idx) => (&target[..idx], Some(&target[idx + 1..])),
        None => (target, None),
    }
}

/// Lexically clean a path: resolve `.`/`..` components without touching the
/// filesystem (equivalent in spirit to Go's `filepath.Clean`).
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.push(component.as_os_str());
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Walk upward from `source_file` looking for an ancestor directory literally
/// named `content`. Returns that directory if found (spec.md §4.2 step 2).
pub fn find_content_root(source_file: &Path) -> Option<PathBuf> {
    let mut current = source_file.parent();
    while let Some(dir) = current {
        if dir.file_name().is_some_and(|n| n == "content") {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Case-insensitive-aware existence check, mirroring macOS/NTFS filesystem
/// semantics: a lookup for `Foo.md` succeeds when the directory entry is
/// actually named `foo.md`.
pub fn exists_fold(path: &Path) -> bool {
    if path.exists() {
        return true;
    }
    let Some(parent) = path.parent() else {
        return false;
    };
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Ok(entries) = std::fs::read_dir(parent) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry
            .file_name()
            .to_str()
            .is_some_and(|n| n.eq_ignore_ascii_case(name))
    })
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Resolve a link's destination to an absolute filesystem path (spec.md §4.2).
///
/// Always returns a path: the final existing candidate if extension
/// inference (step 4) succeeded, otherwise the cleaned candidate as written.
pub fn resolve(source_file: &Path, link_target: &str) -> PathBuf {
    let (path_part, _fragment) = split_fragment(link_target);

    let candidate = if let Some(rest) = path_part.strip_prefix('/') {
        match find_content_root(source_file) {
            Some(root) => root.join(rest),
            None => PathBuf::from("/").join(rest),
        }
    } else {
        let base = source_file.parent().unwrap_or_else(|| Path::new(""));
        base.join(path_part)
    };

    let cleaned = clean(&candidate);

    if exists_fold(&cleaned) {
        return cleaned;
    }

    for ext in ["md", "markdown"] {
        let with_ext = append_extension(&cleaned, ext);
        if exists_fold(&with_ext) {
            return with_ext;
        }
    }

    cleaned
}
