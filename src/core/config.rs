//! Global configuration, loaded from multiple sources:
//! - `.docdoctor/config.yaml`
//! - `DOCDOCTOR_*` environment variables
//! - CLI arguments (merged in last, highest priority)

use crate::errors::{OcError, OcResult};
use crate::DEFAULT_DATA_DIR;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration directory.
pub const CONFIG_DIR: &str = ".docdoctor";
/// Name of the configuration file.
pub const CONFIG_FILE: &str = "config.yaml";

/// Configuration driving a `lint`/`fix` run, including the rename-healing
/// engine's docs-root and git-history-depth knobs (spec.md §4.4, §4.8).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealConfig {
    /// Directories within which every rename mapping must lie (spec.md §4.4).
    pub docs_roots: Vec<PathBuf>,
    /// Filenames ignored by the broken-link detector, case-insensitively.
    pub ignore_files: Vec<String>,
    /// How many commits of `git log --name-status -M` to scan for renames.
    pub git_history_depth: usize,
    /// Verbose logging.
    pub verbose: bool,
    /// Parallel discovery/scan (never the heal/write path, spec.md §5).
    pub parallel: bool,
}

impl Default for HealConfig {
    fn default() -> Self {
        Self {
            docs_roots: vec![PathBuf::from(DEFAULT_DATA_DIR)],
            ignore_files: vec!["README.md".to_string()],
            git_history_depth: 500,
            verbose: false,
            parallel: true,
        }
    }
}

impl HealConfig {
    pub fn builder() -> HealConfigBuilder {
        HealConfigBuilder::new()
    }

    pub fn from_file(path: impl AsRef<Path>) -> OcResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| OcError::FileRead { path: path.to_path_buf(), source: e })?;

        serde_yaml::from_str(&content)
            .map_err(|e| OcError::YamlParse { path: path.to_path_buf(), message: e.to_string() })
    }

    pub fn from_cwd() -> OcResult<Self> {
        let config_path = Path::new(CONFIG_DIR).join(CONFIG_FILE);

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("DOCDOCTOR_DOCS_ROOT") {
            config.docs_roots = vec![PathBuf::from(val)];
        }
        if let Ok(val) = env::var("DOCDOCTOR_VERBOSE") {
            config.verbose = val.parse().unwrap_or(false);
        }
        if let Ok(val) = env::var("DOCDOCTOR_PARALLEL") {
            config.parallel = val.parse().unwrap_or(true);
        }
        if let Ok(val) = env::var("DOCDOCTOR_GIT_HISTORY_DEPTH") {
            config.git_history_depth = val.parse().unwrap_or(500);
        }

        config
    }

    /// Merge `other` into `self`, with `other` taking priority wherever it
    /// differs from the default.
    pub fn merge(&mut self, other: Self) {
        let default = Self::default();
        if other.docs_roots != default.docs_roots {
            self.docs_roots = other.docs_roots;
        }
        if other.verbose {
            self.verbose = true;
        }
        if !other.parallel {
            self.parallel = false;
        }
        if other.git_history_depth != default.git_history_depth {
            self.git_history_depth = other.git_history_depth;
        }
    }

    pub fn validate(&self) -> OcResult<()> {
        if self.docs_roots.is_empty() {
            return Err(OcError::InvalidArgument("docs_roots must not be empty".to_string()));
        }
        for root in &self.docs_roots {
            if !root.exists() {
                return Err(OcError::DirectoryNotFound(root.clone()));
            }
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> OcResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| OcError::FileWrite { path: parent.to_path_buf(), source: e })?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| OcError::Custom(e.to_string()))?;

        fs::write(path, yaml).map_err(|e| OcError::FileWrite { path: path.to_path_buf(), source: e })
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }
}

/// Builder for [`HealConfig`].
#[derive(Debug, Default)]
pub struct HealConfigBuilder {
    docs_roots: Option<Vec<PathBuf>>,
    ignore_files: Option<Vec<String>>,
    git_history_depth: Option<usize>,
    verbose: Option<bool>,
    parallel: Option<bool>,
}

impl HealConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn docs_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs_roots = Some(vec![dir.into()]);
        self
    }

    pub fn docs_roots(mut self, dirs: Vec<PathBuf>) -> Self {
        self.docs_roots = Some(dirs);
        self
    }

    pub fn git_history_depth(mut self, depth: usize) -> Self {
        self.git_history_depth = Some(depth);
        self
    }

    pub fn verbose(mut self, v: bool) -> Self {
        self.verbose = Some(v);
        self
    }

    pub fn parallel(mut self, p: bool) -> Self {
        self.parallel = Some(p);
        self
    }

    pub fn build(self) -> HealConfig {
        let default = HealConfig::default();
        HealConfig {
            docs_roots: self.docs_roots.unwrap_or(default.docs_roots),
            ignore_files: self.ignore_files.unwrap_or(default.ignore_files),
            git_history_depth: self.git_history_depth.unwrap_or(default.git_history_depth),
            verbose: self.verbose.unwrap_or(default.verbose),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_points_at_content_root() {
        let config = HealConfig::default();
        assert_eq!(config.docs_roots, vec![PathBuf::from(DEFAULT_DATA_DIR)]);
        assert!(config.parallel);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = HealConfig::builder().docs_root("docs").verbose(true).git_history_depth(50).build();

        assert_eq!(config.docs_roots, vec![PathBuf::from("docs")]);
        assert!(config.verbose);
        assert_eq!(config.git_history_depth, 50);
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");

        let config = HealConfig::builder().docs_root("content").verbose(true).build();
        config.save(&config_path).unwrap();

        let loaded = HealConfig::from_file(&config_path).unwrap();
        assert_eq!(loaded.docs_roots, vec![PathBuf::from("content")]);
        assert!(loaded.verbose);
    }

    #[test]
    fn validate_rejects_missing_docs_root() {
        let config = HealConfig::builder().docs_root("/nonexistent/path/xyz").build();
        assert!(config.validate().is_err());
    }
}
