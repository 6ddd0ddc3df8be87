//! The rule engine: filename and frontmatter conventions consumed as
//! external collaborators by the rename-healing core (spec.md §1 "out of
//! scope"). Renames this engine performs become the core's `fixer`
//! `RenameMapping` source.

pub mod filenames;
pub mod frontmatter;

pub use filenames::{suggest_rename, RenameSuggestion};
pub use frontmatter::{check_frontmatter, FrontmatterIssue};
