//! C8: heal orchestrator.
//!
//! Ties C1-C7 together behind the single `heal()` entry point, including the
//! HEAD-file fallback for round-trip renames invisible to `git diff`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::cancel::CancellationToken;
use super::detect::{is_external, is_shortcode_argument};
use super::extract::extract_links;
use super::index::{LookupResult, RenameIndex};
use super::model::{BrokenLink, FixResult, HealSkipped, LinkKind, LinkUpdate, RenameMapping, RenameSource};
use super::resolve::resolve;
use super::rewrite::rewrite_target;
use super::vcs::{union_mappings, VcsCapability};
use super::writer::{apply_transaction, PendingEdit};
use crate::errors::OcResult;

/// Entry point for spec.md §4.8. Mutates `fix_result` and `fingerprint_targets`
/// in place; returns an error only for unrecoverable VCS or cancellation
/// failures (per-link ambiguity and resolution misses are not errors).
#[allow(clippy::too_many_arguments)]
pub fn heal(
    root_path: &Path,
    broken_links: &[BrokenLink],
    fix_result: &mut FixResult,
    fingerprint_targets: &mut Vec<PathBuf>,
    fixer_mappings: &[RenameMapping],
    vcs: &dyn VcsCapability,
    history_depth: usize,
    docs_roots: &[PathBuf],
    token: &CancellationToken,
) -> OcResult<()> {
    if broken_links.is_empty() {
        return Ok(());
    }

    let docs_root = if root_path.is_dir() {
        root_path.to_path_buf()
    } else {
        root_path.parent().unwrap_or(root_path).to_path_buf()
    };
    let repo_dir = vcs.top_level(token).unwrap_or_else(|_| docs_root.clone());

    let uncommitted = match vcs.uncommitted_renames(token) {
        Ok(u) => u,
        Err(err) => {
            fix_result.errors.push(err.to_string());
            return Ok(());
        }
    };
    let historical = match vcs.historical_renames(history_depth, token) {
        Ok(h) => h,
        Err(err) => {
            fix_result.errors.push(err.to_string());
            return Ok(());
        }
    };

    let mappings = union_mappings(fixer_mappings, &repo_dir, uncommitted, historical, docs_roots)?;
    let index = RenameIndex::build(&mappings);

    // per (source_file, old_abs) groups of edits to apply transactionally
    let mut groups: HashMap<(PathBuf, PathBuf), Vec<PendingEdit>> = HashMap::new();
    let mut resolved_sources: HashMap<(PathBuf, PathBuf), PathBuf> = HashMap::new();

    for link in broken_links {
        if token.is_cancelled() {
            return Err(crate::errors::OcError::Cancelled);
        }
        if link.target.is_empty() || is_external(&link.target) || is_shortcode_argument(&link.target)
        {
            continue;
        }

        let resolved = resolve(&link.source_file, &link.target);

        match index.lookup(&resolved) {
            LookupResult::Hit(new_abs) => {
                queue_edit(link, &resolved, &new_abs, &mut groups, &mut resolved_sources);
            }
            LookupResult::Ambiguous(mut candidates) => {
                candidates.sort();
                candidates.dedup();
                fix_result.heal_skipped.push(HealSkipped {
                    source_file: link.source_file.clone(),
                    line_number: link.line_number,
                    target: link.target.clone(),
                    reason: "ambiguous git rename mapping".to_string(),
                    candidates: candidates.iter().map(|p| p.to_string_lossy().into_owned()).collect(),
                });
            }
            LookupResult::Miss => {
                if let Some(mapping) = try_head_fallback(link, vcs, token) {
                    queue_edit(link, &resolved, &mapping.new_abs, &mut groups, &mut resolved_sources);
                }
                // otherwise: silent skip, link remains in fix_result.broken_links
            }
        }
    }

    for ((source_file, old_abs), edits) in groups {
        let new_abs = resolved_sources.get(&(source_file.clone(), old_abs.clone())).cloned();
        let Some(new_abs) = new_abs else { continue };

        let _span = tracing::debug_span!(
            "heal_transaction",
            old = %old_abs.display(),
            new = %new_abs.display(),
            edits = edits.len(),
        )
        .entered();

        let applied_edits = edits.clone();
        match apply_transaction(edits) {
            Ok(()) => {
                tracing::debug!("transaction committed");
                for edit in &applied_edits {
                    fix_result.links_updated.push(LinkUpdate {
                        source_file: edit.source_file.clone(),
                        line_number: edit.line_number,
                        old_target: edit.old_text.clone(),
                        new_target: edit.new_text.clone(),
                    });
                }
                for link in broken_links {
                    if link.source_file == source_file {
                        let candidate_resolved = resolve(&link.source_file, &link.target);
                        if candidate_resolved == old_abs {
                            fix_result.prune_healed(&link.source_file, &link.target);
                        }
                    }
                }
                if !fingerprint_targets.contains(&source_file) {
                    fingerprint_targets.push(source_file);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "transaction rolled back");
                fix_result.errors.push(err.to_string());
            }
        }
    }

    Ok(())
}

fn queue_edit(
    link: &BrokenLink,
    old_abs: &Path,
    new_abs: &Path,
    groups: &mut HashMap<(PathBuf, PathBuf), Vec<PendingEdit>>,
    resolved_sources: &mut HashMap<(PathBuf, PathBuf), PathBuf>,
) {
    let original_target = match &link.fragment {
        Some(frag) => format!("{}#{}", link.target, frag),
        None => link.target.clone(),
    };
    let Some(rewrite) = rewrite_target(&link.source_file, &original_target, new_abs) else {
        return;
    };
    if !rewrite.changed {
        return;
    }

    let key = (link.source_file.clone(), old_abs.to_path_buf());
    resolved_sources.insert(key.clone(), new_abs.to_path_buf());
    groups.entry(key).or_default().push(PendingEdit {
        source_file: link.source_file.clone(),
        line_number: link.line_number,
        old_text: original_target,
        new_text: rewrite.new_target,
    });
}

/// Round-trip-rename fallback (spec.md §4.8 "HEAD-file fallback").
fn try_head_fallback(
    link: &BrokenLink,
    vcs: &dyn VcsCapability,
    token: &CancellationToken,
) -> Option<RenameMapping> {
    let content = std::fs::read_to_string(&link.source_file).ok()?;
    let current_links = extract_links(&link.source_file, &content);

    let same_line_and_dest: Vec<_> = current_links
        .iter()
        .filter(|l| l.file_line == link.line_number && l.destination == link.target)
        .collect();
    if same_line_and_dest.len() != 1 {
        return None; // ambiguous correlation on this line, abort fallback
    }

    let ordinal = current_links
        .iter()
        .position(|l| std::ptr::eq(l, same_line_and_dest[0]))?;
    let kind = same_line_and_dest[0].kind;

    let head_bytes = vcs.show_at_head(&link.source_file, token).ok().flatten()?;
    let head_links = extract_links(&link.source_file, &head_bytes);

    let head_link = head_links
        .iter()
        .filter(|l| l.kind == kind)
        .nth(position_among_same_kind(&current_links, ordinal, kind)?)?;

    if head_link.destination == link.target {
        return None; // no change at HEAD, nothing to heal
    }

    let head_resolved = resolve(&link.source_file, &head_link.destination);
    if !super::resolve::exists_fold(&head_resolved) {
        return None;
    }

    let old_resolved = resolve(&link.source_file, &link.target);
    Some(RenameMapping { old_abs: old_resolved, new_abs: head_resolved, source: RenameSource::GitHistory })
}

/// Index of `ordinal` among links sharing `kind`, used to correlate ordinal
/// position within same-kind links only (a same-kind-only ordinal is a
/// stronger correlation than raw position across all link kinds).
fn position_among_same_kind(
    links: &[super::model::LinkRef],
    ordinal: usize,
    kind: LinkKind,
) -> Option<usize> {
    links[..=ordinal].iter().filter(|l| l.kind == kind).count().checked_sub(1)
}
