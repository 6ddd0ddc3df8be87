//! Test doubles.
//!
//! A single in-memory implementation of `healer::vcs::VcsCapability`, shared
//! by unit tests across the crate instead of each module hand-rolling its own.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::OcResult;
use crate::healer::vcs::VcsCapability;
use crate::healer::CancellationToken;

/// An in-memory VCS double: every method answers from fields set up by the
/// test, never shelling out to a real `git` binary.
#[derive(Debug, Default, Clone)]
pub struct FakeVcs {
    pub top_level: PathBuf,
    pub uncommitted: Vec<(PathBuf, PathBuf)>,
    pub historical: Vec<(PathBuf, PathBuf)>,
    pub head_content: HashMap<PathBuf, String>,
}

impl FakeVcs {
    pub fn new(top_level: impl Into<PathBuf>) -> Self {
        Self { top_level: top_level.into(), ..Default::default() }
    }

    pub fn with_uncommitted(mut self, old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> Self {
        self.uncommitted.push((old.into(), new.into()));
        self
    }

    pub fn with_historical(mut self, old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> Self {
        self.historical.push((old.into(), new.into()));
        self
    }

    pub fn with_head_content(mut self, relpath: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.head_content.insert(relpath.into(), content.into());
        self
    }
}

impl VcsCapability for FakeVcs {
    fn top_level(&self, _token: &CancellationToken) -> OcResult<PathBuf> {
        Ok(self.top_level.clone())
    }

    fn uncommitted_renames(&self, _token: &CancellationToken) -> OcResult<Vec<(PathBuf, PathBuf)>> {
        Ok(self.uncommitted.clone())
    }

    fn historical_renames(
        &self,
        _depth: usize,
        _token: &CancellationToken,
    ) -> OcResult<Vec<(PathBuf, PathBuf)>> {
        Ok(self.historical.clone())
    }

    fn show_at_head(&self, relpath: &Path, _token: &CancellationToken) -> OcResult<Option<String>> {
        Ok(self.head_content.get(relpath).cloned())
    }
}
