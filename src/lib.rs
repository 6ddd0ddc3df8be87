//! # docdoctor_lib
//!
#![allow(clippy::ptr_arg)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::manual_strip)]
#![allow(clippy::new_ret_no_self)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::redundant_closure)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::to_string_in_format_args)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::search_is_some)]
#![allow(clippy::double_ended_iterator_last)]
#![allow(clippy::expect_fun_call)]
#![allow(clippy::cmp_owned)]
#![allow(clippy::manual_is_ascii_check)]
#![allow(clippy::io_other_error)]
//!
//! A rename-healing Markdown documentation linter/fixer for Hugo-style
//! content trees: YAML frontmatter, site-absolute and relative links,
//! shortcodes. `lint` detects broken links and convention violations;
//! `lint --fix` remediates them, including rewriting links left dangling
//! by a file rename.
//!
//! ## Module layout
//!
//! ```text
//! docdoctor_lib
//! ├── core/       # config, CLI scaffolding, filesystem utilities
//! ├── healer/     # the rename-healing engine (C1-C8)
//! ├── rules/      # filename and frontmatter conventions
//! ├── commands/   # `lint`/`fix` CLI command implementations
//! ├── discovery/  # markdown/asset file enumeration
//! ├── fingerprint/# content hashing for downstream cache invalidation
//! ├── errors/     # centralized error type (OcError)
//! ├── types/      # fundamental newtypes (DataPath)
//! └── ui/         # terminal output (tables, colored logging)
//! ```
//!
//! ## Basic usage
//!
//! ```rust,ignore
//! use docdoctor_lib::healer::{self, CancellationToken};
//! use docdoctor_lib::OcResult;
//! use std::path::Path;
//!
//! fn main() -> OcResult<()> {
//!     let token = CancellationToken::new();
//!     let result = healer::fix(
//!         Path::new("content"),
//!         &[],
//!         500,
//!         &[Path::new("content").to_path_buf()],
//!         false,
//!         &token,
//!     )?;
//!     println!("links updated: {}", result.links_updated.len());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod discovery;
pub mod errors;
pub mod fingerprint;
pub mod healer;
pub mod rules;
pub mod testing;
pub mod types;
pub mod ui;

#[macro_use]
pub mod macros;

pub use core::config::HealConfig;
pub use errors::{OcError, OcResult};
pub use types::DataPath;

/// Default docs root, used across the CLI's commands.
pub const DEFAULT_DATA_DIR: &str = "content";

/// CLI parameters common to every subcommand.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Verbose debug output.
    pub verbose: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Directory where the Markdown documents live.
    pub data_dir: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { verbose: false, quiet: false, data_dir: DEFAULT_DATA_DIR.to_string() }
    }
}
