//! CLI command implementations.

use crate::CliConfig;
#[cfg(feature = "cli")]
use clap::Subcommand;

pub mod fix;
pub mod lint;

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect broken links and convention violations.
    Lint(lint::LintCommand),
    /// Detect and heal broken links, applying filename/frontmatter fixes.
    Fix(fix::FixCommand),
}

#[cfg(feature = "cli")]
pub fn execute(cmd: Command, cli: &CliConfig) -> anyhow::Result<()> {
    match cmd {
        Command::Lint(args) => lint::run(args, cli),
        Command::Fix(args) => fix::run(args, cli),
    }
}
