//! C5: rename index & disambiguator.
//!
//! Two dictionaries keyed by old-path — exact and case-folded — built once
//! per `Fix` and consulted by the orchestrator for every broken link.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::model::RenameMapping;

/// Outcome of looking a resolved target up in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// Exactly one candidate mapped to a single `newAbs`.
    Hit(PathBuf),
    /// More than one distinct `newAbs` among the matching candidates.
    Ambiguous(Vec<PathBuf>),
    /// No candidate matched anything in either dictionary.
    Miss,
}

fn fold_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Built once per `Fix` invocation from the normalized mapping set.
pub struct RenameIndex {
    exact: HashMap<PathBuf, Vec<PathBuf>>,
    folded: HashMap<String, Vec<PathBuf>>,
}

impl RenameIndex {
    pub fn build(mappings: &[RenameMapping]) -> Self {
        let mut exact: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
        let mut folded: HashMap<String, Vec<PathBuf>> = HashMap::new();

        for mapping in mappings {
            exact.entry(mapping.old_abs.clone()).or_default().push(mapping.new_abs.clone());
            folded
                .entry(fold_key(&mapping.old_abs))
                .or_default()
                .push(mapping.new_abs.clone());
        }

        Self { exact, folded }
    }

    /// Candidate old paths for a resolved target, mirroring Hugo's URL↔file
    /// duality (spec.md §4.5 step 1): the path itself, plus extension
    /// addition or removal depending on what it already carries.
    pub fn candidates(resolved: &Path) -> Vec<PathBuf> {
        let mut out = vec![resolved.to_path_buf()];

        let ext = resolved.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
        if ext.is_empty() || ext == "html" || ext == "htm" {
            for markdown_ext in ["md", "markdown"] {
                let mut s = resolved.as_os_str().to_os_string();
                s.push(".");
                s.push(markdown_ext);
                out.push(PathBuf::from(s));
            }
        } else if ext == "md" || ext == "markdown" {
            out.push(resolved.with_extension(""));
        }

        out
    }

    fn lookup_in(dict: &HashMap<PathBuf, Vec<PathBuf>>, candidates: &[PathBuf]) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for candidate in candidates {
            if let Some(targets) = dict.get(candidate) {
                found.extend(targets.iter().cloned());
            }
        }
        found
    }

    fn lookup_folded(&self, candidates: &[PathBuf]) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for candidate in candidates {
            let key = fold_key(candidate);
            if let Some(targets) = self.folded.get(&key) {
                found.extend(targets.iter().cloned());
            }
        }
        found
    }

    fn resolve_found(mut found: Vec<PathBuf>) -> LookupResult {
        found.sort();
        found.dedup();
        match found.len() {
            0 => LookupResult::Miss,
            1 => LookupResult::Hit(found.into_iter().next().unwrap()),
            _ => LookupResult::Ambiguous(found),
        }
    }

    /// Look up a resolved broken-link target (spec.md §4.5 steps 2-4).
    pub fn lookup(&self, resolved: &Path) -> LookupResult {
        let candidates = Self::candidates(resolved);

        let exact_hits = Self::lookup_in(&self.exact, &candidates);
        if !exact_hits.is_empty() {
            return Self::resolve_found(exact_hits);
        }

        let folded_hits = self.lookup_folded(&candidates);
        Self::resolve_found(folded_hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healer::model::RenameSource;

    fn mapping(old: &str, new: &str) -> RenameMapping {
        RenameMapping {
            old_abs: PathBuf::from(old),
            new_abs: PathBuf::from(new),
            source: RenameSource::GitUncommitted,
        }
    }

    #[test]
    fn exact_hit_returns_single_mapping() {
        let index = RenameIndex::build(&[mapping("/docs/old/target.md", "/docs/new/target.md")]);
        let result = index.lookup(Path::new("/docs/old/target.md"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/new/target.md")));
    }

    #[test]
    fn miss_when_no_candidate_matches() {
        let index = RenameIndex::build(&[mapping("/docs/old/target.md", "/docs/new/target.md")]);
        let result = index.lookup(Path::new("/docs/unrelated.md"));
        assert_eq!(result, LookupResult::Miss);
    }

    #[test]
    fn extensionless_candidate_matches_markdown_mapping() {
        let index = RenameIndex::build(&[mapping("/docs/old.md", "/docs/new.md")]);
        let result = index.lookup(Path::new("/docs/old"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/new.md")));
    }

    #[test]
    fn markdown_candidate_matches_extensionless_mapping() {
        let index = RenameIndex::build(&[mapping("/docs/old", "/docs/new")]);
        let result = index.lookup(Path::new("/docs/old.md"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/new")));
    }

    #[test]
    fn exact_duplicate_same_target_is_not_ambiguous() {
        let index = RenameIndex::build(&[
            mapping("/docs/old.md", "/docs/new.md"),
            mapping("/docs/old.md", "/docs/new.md"),
        ]);
        let result = index.lookup(Path::new("/docs/old.md"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/new.md")));
    }

    #[test]
    fn conflicting_targets_are_ambiguous() {
        let index = RenameIndex::build(&[
            mapping("/docs/old.md", "/docs/new-a.md"),
            mapping("/docs/old.md", "/docs/new-b.md"),
        ]);
        let result = index.lookup(Path::new("/docs/old.md"));
        match result {
            LookupResult::Ambiguous(mut candidates) => {
                candidates.sort();
                assert_eq!(
                    candidates,
                    vec![PathBuf::from("/docs/new-a.md"), PathBuf::from("/docs/new-b.md")]
                );
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn exact_match_wins_over_case_sensitive_folded_collision() {
        // Foo.md and foo.md both exist as distinct exact keys; looking up
        // Foo.md exactly must not be contaminated by foo.md's folded entry.
        let index = RenameIndex::build(&[
            mapping("/docs/Foo.md", "/docs/FooNew.md"),
            mapping("/docs/foo.md", "/docs/fooNew.md"),
        ]);
        let result = index.lookup(Path::new("/docs/Foo.md"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/FooNew.md")));
    }

    #[test]
    fn falls_back_to_folded_when_no_exact_match() {
        let index = RenameIndex::build(&[mapping("/docs/Foo.md", "/docs/FooNew.md")]);
        let result = index.lookup(Path::new("/docs/foo.md"));
        assert_eq!(result, LookupResult::Hit(PathBuf::from("/docs/FooNew.md")));
    }

    #[test]
    fn folded_fallback_can_be_ambiguous() {
        let index = RenameIndex::build(&[
            mapping("/docs/Foo.md", "/docs/FooNew.md"),
            mapping("/docs/FOO.md", "/docs/fooNew.md"),
        ]);
        let result = index.lookup(Path::new("/docs/foo.md"));
        match result {
            LookupResult::Ambiguous(candidates) => assert_eq!(candidates.len(), 2),
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }
}
