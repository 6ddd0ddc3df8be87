//! Filesystem utilities for scanning and manipulating Markdown files.
//!
//! Provides:
//! - Directory scanning for `.md` files
//! - Read/write with error context
//! - Atomic writes and simple backup/restore

use std::path::{Path, PathBuf};
use std::fs;
use std::time::SystemTime;
use walkdir::{WalkDir, DirEntry};
use crate::errors::{OcError, OcResult};

/// Options controlling a directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Substrings to exclude (simple glob-like matching).
    pub exclude_patterns: Vec<String>,
    /// Maximum recursion depth (0 = unbounded).
    pub max_depth: usize,
    /// Follow symlinks.
    pub follow_symlinks: bool,
    /// Include dotfiles.
    pub include_hidden: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excludes(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// Metadata about a single file.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
    pub is_symlink: bool,
}

/// Scan `dir` for Markdown files matching `options`.
pub fn get_all_md_files(dir: impl AsRef<Path>, options: &ScanOptions) -> OcResult<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(OcError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).follow_links(options.follow_symlinks);

    if options.max_depth > 0 {
        walker = walker.max_depth(options.max_depth);
    }

    let files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| is_valid_md_file(e, options))
        .map(|e| e.path().to_path_buf())
        .collect();

    Ok(files)
}

fn is_valid_md_file(entry: &DirEntry, options: &ScanOptions) -> bool {
    let path = entry.path();

    if !path.is_file() {
        return false;
    }

    let ext = path.extension().and_then(|e| e.to_str());
    if ext != Some("md") {
        return false;
    }

    if !options.include_hidden {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }
    }

    let path_str = path.to_string_lossy();
    for pattern in &options.exclude_patterns {
        if path_str.contains(pattern) {
            return false;
        }
    }

    true
}

/// Read a file's contents as UTF-8.
pub fn read_file_content(path: impl AsRef<Path>) -> OcResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OcError::FileNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|e| OcError::FileRead { path: path.to_path_buf(), source: e })
}

/// Read a file's raw bytes.
pub fn read_file_bytes(path: impl AsRef<Path>) -> OcResult<Vec<u8>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OcError::FileNotFound(path.to_path_buf()));
    }

    fs::read(path).map_err(|e| OcError::FileRead { path: path.to_path_buf(), source: e })
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file_content(path: impl AsRef<Path>, content: &str) -> OcResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| OcError::FileWrite { path: parent.to_path_buf(), source: e })?;
        }
    }

    fs::write(path, content).map_err(|e| OcError::FileWrite { path: path.to_path_buf(), source: e })
}

/// Write `content` to `path` atomically via a temp file plus rename.
pub fn write_file_atomic(path: impl AsRef<Path>, content: &str) -> OcResult<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| OcError::FileWrite { path: parent.to_path_buf(), source: e })?;
        }
    }

    fs::write(&tmp_path, content)
        .map_err(|e| OcError::FileWrite { path: tmp_path.clone(), source: e })?;

    fs::rename(&tmp_path, path).map_err(|e| OcError::FileWrite { path: path.to_path_buf(), source: e })
}

/// Fetch metadata for `path`.
pub fn get_file_metadata(path: impl AsRef<Path>) -> OcResult<FileMetadata> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OcError::FileNotFound(path.to_path_buf()));
    }

    let metadata =
        fs::metadata(path).map_err(|e| OcError::FileRead { path: path.to_path_buf(), source: e })?;

    let symlink_metadata = fs::symlink_metadata(path).ok();
    let is_symlink = symlink_metadata.map(|m| m.file_type().is_symlink()).unwrap_or(false);

    Ok(FileMetadata {
        path: path.to_path_buf(),
        size: metadata.len(),
        modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        is_symlink,
    })
}

/// Create a `.md.bak` sibling copy of `path`.
///
/// The healer's own transactional writer (`healer::writer`) uses a
/// different, `.backup`-suffixed convention scoped to one transaction —
/// this helper is the general-purpose one used elsewhere.
pub fn backup_file(path: impl AsRef<Path>) -> OcResult<PathBuf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OcError::FileNotFound(path.to_path_buf()));
    }

    let backup_path = path.with_extension("md.bak");

    fs::copy(path, &backup_path)
        .map_err(|e| OcError::FileWrite { path: backup_path.clone(), source: e })?;

    Ok(backup_path)
}

/// Remove a `.md.bak` sibling if one exists.
pub fn remove_backup(path: impl AsRef<Path>) -> OcResult<bool> {
    let backup_path = path.as_ref().with_extension("md.bak");

    if backup_path.exists() {
        fs::remove_file(&backup_path)
            .map_err(|e| OcError::FileWrite { path: backup_path, source: e })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Restore `path` from its `.md.bak` sibling.
pub fn restore_from_backup(path: impl AsRef<Path>) -> OcResult<()> {
    let path = path.as_ref();
    let backup_path = path.with_extension("md.bak");

    if !backup_path.exists() {
        return Err(OcError::FileNotFound(backup_path));
    }

    fs::copy(&backup_path, path).map_err(|e| OcError::FileWrite { path: path.to_path_buf(), source: e })?;

    Ok(())
}

/// Count Markdown files under `dir`.
pub fn count_md_files(dir: impl AsRef<Path>) -> OcResult<usize> {
    let files = get_all_md_files(dir, &ScanOptions::default())?;
    Ok(files.len())
}

/// Total byte size of Markdown files under `dir`.
pub fn total_md_size(dir: impl AsRef<Path>) -> OcResult<u64> {
    let files = get_all_md_files(dir, &ScanOptions::default())?;
    let mut total = 0u64;

    for file in files {
        if let Ok(meta) = get_file_metadata(&file) {
            total += meta.size;
        }
    }

    Ok(total)
}
