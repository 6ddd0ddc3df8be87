//! `fix` command: apply filename-convention renames, then run the
//! rename-healing engine so no link is left dangling by them (or by any
//! rename already staged/committed in git).

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::discovery::discover_markdown_files;
use crate::errors::OcResult;
use crate::healer::{self, CancellationToken, FixResult, RenameMapping, RenameSource};
use crate::rules::suggest_rename;
use crate::ui::{logger, tables};
use crate::CliConfig;

/// `fix` CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "fix", about = "Detect and heal broken links, applying filename fixes")]
pub struct FixCommand {
    /// Target path (default: the global docs root).
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Show what would change without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// How many commits of history to scan for renames.
    #[arg(long, default_value_t = 500)]
    pub history_depth: usize,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Rename every Markdown file under `root` that violates the filename
/// convention. Returns the `RenameMapping`s produced, so the healer can
/// follow them when rewriting inbound links. A no-op under `dry_run`.
fn apply_filename_renames(root: &std::path::Path, dry_run: bool) -> OcResult<Vec<RenameMapping>> {
    let mut mappings = Vec::new();

    for file in discover_markdown_files(root)? {
        let Some(suggestion) = suggest_rename(&file) else { continue };

        if dry_run {
            logger::log_info(&format!(
                "would rename {} -> {}",
                suggestion.old_path.display(),
                suggestion.new_path.display()
            ));
            continue;
        }

        let old_abs = fs::canonicalize(&suggestion.old_path)
            .unwrap_or_else(|_| suggestion.old_path.clone());
        let new_abs = old_abs
            .parent()
            .map(|p| p.join(suggestion.new_path.file_name().unwrap_or_default()))
            .unwrap_or_else(|| suggestion.new_path.clone());

        fs::rename(&suggestion.old_path, &suggestion.new_path)
            .map_err(|e| crate::errors::OcError::FileWrite { path: suggestion.new_path.clone(), source: e })?;

        mappings.push(RenameMapping { old_abs, new_abs, source: RenameSource::Fixer });
    }

    Ok(mappings)
}

/// Run filename-convention fixes followed by the rename-healing engine.
pub fn fix(cmd: &FixCommand, cli: &CliConfig) -> OcResult<FixResult> {
    let root = cmd.path.clone().unwrap_or_else(|| PathBuf::from(&cli.data_dir));
    let docs_roots = vec![root.clone()];

    let fixer_mappings = apply_filename_renames(&root, cmd.dry_run)?;

    let token = CancellationToken::new();
    let mut result =
        healer::fix(&root, &fixer_mappings, cmd.history_depth, &docs_roots, cmd.dry_run, &token)?;
    result.files_renamed = fixer_mappings.len();
    Ok(result)
}

fn print_text(result: &FixResult) {
    if result.links_updated.is_empty() && result.broken_links.is_empty() && result.heal_skipped.is_empty() {
        logger::log_success("no broken links found");
        return;
    }

    if !result.links_updated.is_empty() {
        let mut table = tables::create_heal_table();
        for update in &result.links_updated {
            tables::add_row(&mut table, &[
                update.source_file.display().to_string(),
                update.line_number.to_string(),
                update.old_target.clone(),
                update.new_target.clone(),
            ]);
        }
        tables::print_table(&table);
    }

    if !result.heal_skipped.is_empty() {
        let mut table = tables::create_skipped_table();
        for skipped in &result.heal_skipped {
            tables::add_row(&mut table, &[
                skipped.source_file.display().to_string(),
                skipped.line_number.to_string(),
                skipped.target.clone(),
                skipped.reason.clone(),
            ]);
        }
        tables::print_table(&table);
    }

    if !result.broken_links.is_empty() {
        let mut table = tables::create_broken_links_table();
        for broken in &result.broken_links {
            tables::add_row(&mut table, &[
                broken.source_file.display().to_string(),
                broken.line_number.to_string(),
                broken.target.clone(),
            ]);
        }
        tables::print_table(&table);
    }

    for error in &result.errors {
        logger::log_error(error);
    }

    logger::log_info(&format!(
        "{} file(s) renamed, {} link(s) healed, {} left unresolved",
        result.files_renamed,
        result.links_updated.len(),
        result.broken_links.len()
    ));
}

fn print_json(result: &FixResult) -> OcResult<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Entry point wired from [`crate::commands::Command::Fix`].
pub fn run(cmd: FixCommand, cli: &CliConfig) -> anyhow::Result<()> {
    let result = fix(&cmd, cli)?;

    if cmd.json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }

    if !result.broken_links.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
