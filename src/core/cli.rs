//! CLI integration: global argument parsing shared by every subcommand.

use clap::Parser;
use crate::DEFAULT_DATA_DIR;
use std::path::PathBuf;

/// Global CLI options, inherited by every subcommand.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "docdoctor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rename-healing Markdown documentation linter"
)]
pub struct CliApp {
    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only errors are printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Docs root directory.
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Output format (text/json).
    #[arg(long, global = true, default_value = "text")]
    pub format: String,

    /// Configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl CliApp {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    pub fn is_text(&self) -> bool {
        self.format == "text"
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            format: "text".to_string(),
            config: None,
        }
    }
}

/// Result of running one CLI invocation.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub message: Option<String>,
    pub duration_ms: u64,
}

impl CliResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            exit_code: 0,
            message: None,
            duration_ms: 0,
        }
    }

    pub fn error(code: i32, msg: &str) -> Self {
        Self {
            success: false,
            exit_code: code,
            message: Some(msg.to_string()),
            duration_ms: 0,
        }
    }

    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }
}

/// Timing/context for one subcommand invocation.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub start_time: std::time::Instant,
    pub command: String,
    pub args: Vec<String>,
}

impl ExecutionContext {
    pub fn new(command: &str) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            command: command.to_string(),
            args: Vec::new(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}
