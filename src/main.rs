//! docdoctor - rename-healing Markdown documentation linter.

use anyhow::Result;

#[cfg(feature = "cli")]
use clap::Parser;

use docdoctor_lib::{commands, CliConfig};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(
    name = "docdoctor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rename-healing Markdown documentation linter",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: commands::Command,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Docs root directory.
    #[arg(long, global = true, default_value = "content")]
    pub data_dir: String,
}

#[cfg(feature = "cli")]
impl Cli {
    pub fn to_config(&self) -> CliConfig {
        CliConfig { verbose: self.verbose, quiet: false, data_dir: self.data_dir.clone() }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
    } else {
        tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    }

    let config = cli.to_config();
    commands::execute(cli.command, &config)?;

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("docdoctor requires the 'cli' feature. Build with: cargo build --features cli");
    std::process::exit(1);
}
