//! Content fingerprinting: a SHA-256 hash over a file's frontmatter-plus-body,
//! consumed by adjacent tooling to decide whether derived artifacts are
//! stale. Out of scope for the rename-healing core itself (spec.md §1); the
//! core only flags which files' fingerprints need regenerating.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::errors::{OcError, OcResult};

/// Hex-encoded SHA-256 digest of `content`.
pub fn fingerprint_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Read `path` and compute its fingerprint.
pub fn fingerprint_file(path: &Path) -> OcResult<String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| OcError::FileRead { path: path.to_path_buf(), source: e })?;
    Ok(fingerprint_content(&content))
}

/// Recompute fingerprints for a batch of files, e.g. those the heal
/// orchestrator touched during a `Fix` run. Errors for individual files are
/// collected rather than aborting the whole batch.
pub fn regenerate(paths: &[std::path::PathBuf]) -> Vec<(std::path::PathBuf, OcResult<String>)> {
    paths.iter().map(|p| (p.clone(), fingerprint_file(p))).collect()
}
