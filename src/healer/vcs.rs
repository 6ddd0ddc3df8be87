//! C4: rename-mapping sources.
//!
//! Git is treated as a capability interface rather than called ad hoc, the
//! way the pack's `context.rs` wraps its VCS probes — here reworked from an
//! async `tokio::process` call into a synchronous `std::process::Command`
//! one, since the heal/write path stays single-threaded (spec.md §5).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use super::cancel::CancellationToken;
use super::model::{RenameMapping, RenameSource};
use super::resolve::clean;
use crate::errors::{OcError, OcResult};

/// The git operations the rename-healing engine needs, factored out so tests
/// can swap in an in-memory double instead of shelling out to a real repo.
pub trait VcsCapability {
    fn top_level(&self, token: &CancellationToken) -> OcResult<PathBuf>;
    fn uncommitted_renames(&self, token: &CancellationToken) -> OcResult<Vec<(PathBuf, PathBuf)>>;
    fn historical_renames(
        &self,
        depth: usize,
        token: &CancellationToken,
    ) -> OcResult<Vec<(PathBuf, PathBuf)>>;
    fn show_at_head(&self, relpath: &Path, token: &CancellationToken) -> OcResult<Option<String>>;
}

/// Shells out to a real `git` binary in `repo_dir`.
pub struct GitVcs {
    pub repo_dir: PathBuf,
}

impl GitVcs {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self { repo_dir: repo_dir.into() }
    }

    fn run_git(&self, args: &[&str], token: &CancellationToken) -> OcResult<(bool, String, String)> {
        let _span = tracing::debug_span!("git", args = %args.join(" "), dir = %self.repo_dir.display()).entered();
        tracing::trace!("spawning git subprocess");
        let mut child = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| OcError::Vcs { args: args.join(" "), message: e.to_string() })?;

        loop {
            if token.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                return Err(OcError::Cancelled);
            }
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => std::thread::sleep(Duration::from_millis(15)),
                Err(e) => {
                    return Err(OcError::Vcs { args: args.join(" "), message: e.to_string() })
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| OcError::Vcs { args: args.join(" "), message: e.to_string() })?;
        tracing::debug!(success = output.status.success(), "git subprocess finished");
        Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    /// Parse `git diff --name-status -M` / `git log --name-status -M` output,
    /// collecting `R<score>\told\tnew` lines into `(old, new)` pairs.
    fn parse_name_status_renames(stdout: &str) -> Vec<(PathBuf, PathBuf)> {
        let mut renames = Vec::new();
        for line in stdout.lines() {
            let mut fields = line.split('\t');
            let Some(status) = fields.next() else { continue };
            if !status.starts_with('R') {
                continue;
            }
            let (Some(old), Some(new)) = (fields.next(), fields.next()) else { continue };
            renames.push((PathBuf::from(old), PathBuf::from(new)));
        }
        renames
    }
}

impl VcsCapability for GitVcs {
    fn top_level(&self, token: &CancellationToken) -> OcResult<PathBuf> {
        let (ok, stdout, stderr) = self.run_git(&["rev-parse", "--show-toplevel"], token)?;
        if !ok {
            return Err(OcError::VcsNotFound(self.repo_dir.clone()));
        }
        let _ = stderr;
        Ok(PathBuf::from(stdout.trim()))
    }

    fn uncommitted_renames(&self, token: &CancellationToken) -> OcResult<Vec<(PathBuf, PathBuf)>> {
        let (ok, stdout, stderr) =
            self.run_git(&["diff", "--name-status", "-M", "HEAD"], token)?;
        if !ok {
            return Err(OcError::Vcs { args: "diff --name-status -M HEAD".into(), message: stderr });
        }
        Ok(Self::parse_name_status_renames(&stdout))
    }

    fn historical_renames(
        &self,
        depth: usize,
        token: &CancellationToken,
    ) -> OcResult<Vec<(PathBuf, PathBuf)>> {
        let depth_arg = format!("-n {depth}");
        let (ok, stdout, stderr) = self.run_git(
            &["log", "--name-status", "-M", "--pretty=format:", &depth_arg],
            token,
        )?;
        if !ok {
            return Err(OcError::Vcs { args: "log --name-status -M".into(), message: stderr });
        }
        Ok(Self::parse_name_status_renames(&stdout))
    }

    fn show_at_head(&self, relpath: &Path, token: &CancellationToken) -> OcResult<Option<String>> {
        let spec = format!("HEAD:{}", relpath.to_string_lossy());
        let (ok, stdout, _stderr) = self.run_git(&["show", &spec], token)?;
        if !ok {
            return Ok(None);
        }
        Ok(Some(stdout))
    }
}

/// Maximum hops resolved when chaining a VCS-observed rename through the
/// fixer's own in-run renames (spec.md §4.4 "rename chaining").
const MAX_CHAIN_HOPS: usize = 10;

/// Follow `fixer_map` (`old -> new`) from `start` until no further mapping
/// applies or the hop bound is hit, returning the final target.
pub fn chain_through_fixer(start: &Path, fixer_map: &HashMap<PathBuf, PathBuf>) -> PathBuf {
    let mut current = start.to_path_buf();
    for _ in 0..MAX_CHAIN_HOPS {
        match fixer_map.get(&current) {
            Some(next) if next != &current => current = next.clone(),
            _ => break,
        }
    }
    current
}

/// Merge the fixer's own renames with VCS-observed ones, chaining the latter
/// through the former, and normalize the combined set (spec.md §4.4).
pub fn union_mappings(
    fixer_mappings: &[RenameMapping],
    repo_dir: &Path,
    uncommitted: Vec<(PathBuf, PathBuf)>,
    historical: Vec<(PathBuf, PathBuf)>,
    docs_roots: &[PathBuf],
) -> OcResult<Vec<RenameMapping>> {
    let fixer_map: HashMap<PathBuf, PathBuf> = fixer_mappings
        .iter()
        .map(|m| (m.old_abs.clone(), m.new_abs.clone()))
        .collect();

    let mut combined: Vec<RenameMapping> = fixer_mappings.to_vec();

    for (source, pairs) in [
        (RenameSource::GitUncommitted, uncommitted),
        (RenameSource::GitHistory, historical),
    ] {
        for (old_rel, new_rel) in pairs {
            let old_abs = repo_dir.join(&old_rel);
            let new_abs = chain_through_fixer(&repo_dir.join(&new_rel), &fixer_map);
            combined.push(RenameMapping { old_abs, new_abs, source });
        }
    }

    normalize_rename_mappings(combined, docs_roots)
}

/// Clean, validate, deduplicate and deterministically sort a raw set of
/// rename mappings (spec.md §4.4).
///
/// Mappings whose `old_abs`/`new_abs` is not absolute, or that don't fall
/// under any of `docs_roots`, are dropped rather than erroring — a rename
/// observed outside the docs tree simply isn't this engine's concern.
pub fn normalize_rename_mappings(
    mappings: Vec<RenameMapping>,
    docs_roots: &[PathBuf],
) -> OcResult<Vec<RenameMapping>> {
    let mut out = Vec::with_capacity(mappings.len());

    for mapping in mappings {
        if !mapping.old_abs.is_absolute() || !mapping.new_abs.is_absolute() {
            continue;
        }
        let old_abs = clean(&mapping.old_abs);
        let new_abs = clean(&mapping.new_abs);

        let under_roots = |p: &Path| docs_roots.iter().any(|root| p.starts_with(root));
        if !under_roots(&old_abs) || !under_roots(&new_abs) {
            continue;
        }

        out.push(RenameMapping { old_abs, new_abs, source: mapping.source });
    }

    out.sort();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(old: &str, new: &str, source: RenameSource) -> RenameMapping {
        RenameMapping { old_abs: PathBuf::from(old), new_abs: PathBuf::from(new), source }
    }

    #[test]
    fn normalize_drops_relative_paths() {
        let roots = vec![PathBuf::from("/repo/content")];
        let mappings = vec![mapping("content/a.md", "/repo/content/b.md", RenameSource::Fixer)];
        let out = normalize_rename_mappings(mappings, &roots).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn normalize_drops_mappings_outside_docs_roots() {
        let roots = vec![PathBuf::from("/repo/content")];
        let mappings =
            vec![mapping("/repo/other/a.md", "/repo/other/b.md", RenameSource::GitHistory)];
        let out = normalize_rename_mappings(mappings, &roots).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn normalize_removes_exact_duplicates() {
        let roots = vec![PathBuf::from("/repo/content")];
        let mappings = vec![
            mapping("/repo/content/a.md", "/repo/content/b.md", RenameSource::Fixer),
            mapping("/repo/content/a.md", "/repo/content/b.md", RenameSource::Fixer),
        ];
        let out = normalize_rename_mappings(mappings, &roots).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn normalize_sorts_deterministically() {
        let roots = vec![PathBuf::from("/repo/content")];
        let mappings = vec![
            mapping("/repo/content/z.md", "/repo/content/z2.md", RenameSource::Fixer),
            mapping("/repo/content/a.md", "/repo/content/a2.md", RenameSource::GitHistory),
        ];
        let out = normalize_rename_mappings(mappings, &roots).unwrap();
        assert_eq!(out[0].old_abs, PathBuf::from("/repo/content/a.md"));
        assert_eq!(out[1].old_abs, PathBuf::from("/repo/content/z.md"));
    }

    #[test]
    fn normalize_cleans_dotdot_segments() {
        let roots = vec![PathBuf::from("/repo/content")];
        let mappings =
            vec![mapping("/repo/content/./a.md", "/repo/content/sub/../b.md", RenameSource::Fixer)];
        let out = normalize_rename_mappings(mappings, &roots).unwrap();
        assert_eq!(out[0].old_abs, PathBuf::from("/repo/content/a.md"));
        assert_eq!(out[0].new_abs, PathBuf::from("/repo/content/b.md"));
    }

    #[test]
    fn chain_through_fixer_follows_single_hop() {
        let mut map = HashMap::new();
        map.insert(PathBuf::from("/repo/content/b.md"), PathBuf::from("/repo/content/c.md"));
        let result = chain_through_fixer(Path::new("/repo/content/b.md"), &map);
        assert_eq!(result, PathBuf::from("/repo/content/c.md"));
    }

    #[test]
    fn chain_through_fixer_follows_multiple_hops() {
        let mut map = HashMap::new();
        map.insert(PathBuf::from("/repo/content/a.md"), PathBuf::from("/repo/content/b.md"));
        map.insert(PathBuf::from("/repo/content/b.md"), PathBuf::from("/repo/content/c.md"));
        let result = chain_through_fixer(Path::new("/repo/content/a.md"), &map);
        assert_eq!(result, PathBuf::from("/repo/content/c.md"));
    }

    #[test]
    fn chain_through_fixer_stops_at_bound_on_cycles() {
        let mut map = HashMap::new();
        map.insert(PathBuf::from("/a"), PathBuf::from("/b"));
        map.insert(PathBuf::from("/b"), PathBuf::from("/a"));
        // must terminate rather than loop forever
        let result = chain_through_fixer(Path::new("/a"), &map);
        assert!(result == PathBuf::from("/a") || result == PathBuf::from("/b"));
    }

    #[test]
    fn chain_through_fixer_returns_input_when_no_mapping() {
        let map = HashMap::new();
        let result = chain_through_fixer(Path::new("/repo/content/a.md"), &map);
        assert_eq!(result, PathBuf::from("/repo/content/a.md"));
    }

    #[test]
    fn union_mappings_chains_vcs_rename_through_fixer_rename() {
        let repo_dir = PathBuf::from("/repo");
        let roots = vec![PathBuf::from("/repo/content")];
        let fixer = vec![mapping(
            "/repo/content/subdir/File.md",
            "/repo/content/subdir/file.md",
            RenameSource::Fixer,
        )];
        let uncommitted =
            vec![(PathBuf::from("content/file.md"), PathBuf::from("content/subdir/File.md"))];

        let out = union_mappings(&fixer, &repo_dir, uncommitted, Vec::new(), &roots).unwrap();

        let vcs_entry = out
            .iter()
            .find(|m| m.old_abs == PathBuf::from("/repo/content/file.md"))
            .expect("vcs mapping present");
        assert_eq!(vcs_entry.new_abs, PathBuf::from("/repo/content/subdir/file.md"));
    }

    #[test]
    fn vcs_capability_trait_object_is_usable() {
        let fake = crate::testing::FakeVcs::new("/repo").with_uncommitted("a.md", "b.md");
        let token = CancellationToken::new();
        let renames = fake.uncommitted_renames(&token).unwrap();
        assert_eq!(renames, vec![(PathBuf::from("a.md"), PathBuf::from("b.md"))]);
    }

    #[test]
    fn parse_name_status_renames_ignores_non_rename_lines() {
        let stdout = "M\tcontent/unrelated.md\nR100\tcontent/old.md\tcontent/new.md\nA\tcontent/added.md\n";
        let renames = GitVcs::parse_name_status_renames(stdout);
        assert_eq!(renames, vec![(PathBuf::from("content/old.md"), PathBuf::from("content/new.md"))]);
    }
}
