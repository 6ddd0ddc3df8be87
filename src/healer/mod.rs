//! The rename-healing engine: detects documentation links left dangling by a
//! file rename (whether performed by the filename-conventions fixer in the
//! same run, staged in git, or committed to history) and rewrites them to
//! the file's current location — atomically, or not at all.

pub mod cancel;
pub mod detect;
pub mod extract;
pub mod index;
pub mod model;
pub mod orchestrator;
pub mod resolve;
pub mod rewrite;
pub mod vcs;
pub mod writer;

pub use cancel::CancellationToken;
pub use model::{BrokenLink, FixResult, HealSkipped, LinkKind, LinkRef, LinkUpdate, RenameMapping, RenameSource};

use std::path::{Path, PathBuf};

use crate::errors::OcResult;
use crate::fingerprint;
use vcs::{GitVcs, VcsCapability};

/// `DetectBrokenLinks(root)` (spec.md §6).
pub fn detect_broken_links(root: &Path) -> OcResult<Vec<BrokenLink>> {
    detect::detect_broken_links(root)
}

/// `NormalizeRenameMappings(mappings, docsRoots)` (spec.md §6).
pub fn normalize_rename_mappings(
    mappings: Vec<RenameMapping>,
    docs_roots: &[PathBuf],
) -> OcResult<Vec<RenameMapping>> {
    vcs::normalize_rename_mappings(mappings, docs_roots)
}

/// `Heal(path, brokenLinks, result, fpTargets)` (spec.md §6), using a real
/// `git` binary rooted at `path`'s containing repository.
pub fn heal(
    root_path: &Path,
    broken_links: &[BrokenLink],
    fix_result: &mut FixResult,
    fingerprint_targets: &mut Vec<PathBuf>,
    fixer_mappings: &[RenameMapping],
    history_depth: usize,
    docs_roots: &[PathBuf],
    token: &CancellationToken,
) -> OcResult<()> {
    let docs_root = if root_path.is_dir() {
        root_path.to_path_buf()
    } else {
        root_path.parent().unwrap_or(root_path).to_path_buf()
    };
    let git = GitVcs::new(docs_root);
    orchestrator::heal(
        root_path,
        broken_links,
        fix_result,
        fingerprint_targets,
        fixer_mappings,
        &git,
        history_depth,
        docs_roots,
        token,
    )
}

/// `Fix(path)` (spec.md §6): detect broken links under `path` and heal
/// whatever `fixer_mappings` (renames the filename-conventions rule engine
/// already performed earlier in this run) plus VCS history can resolve.
/// Skipped entirely (returns broken links unhealed) when `dry_run` is set.
pub fn fix(
    path: &Path,
    fixer_mappings: &[RenameMapping],
    history_depth: usize,
    docs_roots: &[PathBuf],
    dry_run: bool,
    token: &CancellationToken,
) -> OcResult<FixResult> {
    let broken_links = detect_broken_links(path)?;
    let mut fix_result = FixResult::new();
    fix_result.broken_links = broken_links.clone();

    if dry_run {
        return Ok(fix_result);
    }

    let mut fingerprint_targets = Vec::new();
    heal(
        path,
        &broken_links,
        &mut fix_result,
        &mut fingerprint_targets,
        fixer_mappings,
        history_depth,
        docs_roots,
        token,
    )?;

    // every file the heal pass touched needs its fingerprint regenerated so
    // downstream cache/UID tooling sees the rewritten links, not a stale hash
    for (path, result) in fingerprint::regenerate(&fingerprint_targets) {
        if let Err(err) = result {
            fix_result.errors.push(format!("fingerprint regeneration failed for {}: {err}", path.display()));
        }
    }

    Ok(fix_result)
}
