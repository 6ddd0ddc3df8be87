//! `lint` command: report broken links and filename/frontmatter convention
//! violations without touching any file.

use std::path::PathBuf;

use clap::Parser;

use crate::discovery::discover_markdown_files;
use crate::errors::OcResult;
use crate::healer;
use crate::rules::{check_frontmatter, suggest_rename};
use crate::ui::{logger, tables};
use crate::CliConfig;

/// Severity of a single lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    Error,
    Warning,
}

/// A single lint finding.
#[derive(Debug, Clone)]
pub struct LintIssue {
    pub code: String,
    pub message: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub severity: LintSeverity,
    pub fixable: bool,
}

/// Outcome of one `lint` run.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    pub issues: Vec<LintIssue>,
    pub files_checked: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == LintSeverity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == LintSeverity::Warning).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// `lint` CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "lint", about = "Detect broken links and convention violations")]
pub struct LintCommand {
    /// Target path (default: the global docs root).
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Only report errors, skip warnings.
    #[arg(long)]
    pub errors_only: bool,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Run a lint pass and collect its findings; does not touch disk.
pub fn lint(cmd: &LintCommand, cli: &CliConfig) -> OcResult<LintResult> {
    let root = cmd.path.clone().unwrap_or_else(|| PathBuf::from(&cli.data_dir));
    let files = discover_markdown_files(&root)?;

    let mut result = LintResult::new();
    result.files_checked = files.len();

    for broken in healer::detect_broken_links(&root)? {
        result.issues.push(LintIssue {
            code: "L-BROKEN-LINK".to_string(),
            message: format!("broken link to '{}'", broken.target),
            file: broken.source_file,
            line: Some(broken.line_number),
            severity: LintSeverity::Error,
            fixable: true,
        });
    }

    for file in &files {
        let content = match crate::core::files::read_file_content(file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for issue in check_frontmatter(file, &content) {
            result.issues.push(LintIssue {
                code: "L-FRONTMATTER".to_string(),
                message: issue.message,
                file: issue.path,
                line: None,
                severity: LintSeverity::Warning,
                fixable: false,
            });
        }

        if let Some(suggestion) = suggest_rename(file) {
            result.issues.push(LintIssue {
                code: "L-FILENAME".to_string(),
                message: format!(
                    "filename should be '{}'",
                    suggestion.new_path.file_name().unwrap_or_default().to_string_lossy()
                ),
                file: suggestion.old_path,
                line: None,
                severity: LintSeverity::Warning,
                fixable: true,
            });
        }
    }

    if cmd.errors_only {
        result.issues.retain(|i| i.severity == LintSeverity::Error);
    }

    Ok(result)
}

fn print_text(result: &LintResult) {
    if result.issues.is_empty() {
        logger::log_success(&format!("{} files checked, no issues found", result.files_checked));
        return;
    }

    let mut table = tables::create_table(&["Code", "File", "Line", "Message"]);
    for issue in &result.issues {
        let line = issue.line.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string());
        tables::add_row(&mut table, &[
            issue.code.clone(),
            issue.file.display().to_string(),
            line,
            issue.message.clone(),
        ]);
    }
    tables::print_table(&table);

    logger::log_info(&format!(
        "{} files checked, {} error(s), {} warning(s)",
        result.files_checked,
        result.error_count(),
        result.warning_count()
    ));
}

fn print_json(result: &LintResult) -> OcResult<()> {
    #[derive(serde::Serialize)]
    struct JsonIssue<'a> {
        code: &'a str,
        message: &'a str,
        file: String,
        line: Option<usize>,
        severity: &'a str,
        fixable: bool,
    }

    let issues: Vec<JsonIssue> = result
        .issues
        .iter()
        .map(|i| JsonIssue {
            code: &i.code,
            message: &i.message,
            file: i.file.display().to_string(),
            line: i.line,
            severity: match i.severity {
                LintSeverity::Error => "error",
                LintSeverity::Warning => "warning",
            },
            fixable: i.fixable,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&issues)?);
    Ok(())
}

/// Entry point wired from [`crate::commands::Command::Lint`].
pub fn run(cmd: LintCommand, cli: &CliConfig) -> anyhow::Result<()> {
    let result = lint(&cmd, cli)?;

    if cmd.json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }

    if result.error_count() > 0 {
        std::process::exit(1);
    }

    Ok(())
}
