//! C7: transactional link-update writer.
//!
//! Descending-line-order in-place edits, sibling `.backup` files, and a
//! rollback path that restores every backup taken so far on any failure —
//! the file-level transaction primitive the orchestrator builds on.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::{OcError, OcResult};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// One textual substitution to apply within a single source file.
#[derive(Debug, Clone)]
pub struct PendingEdit {
    pub source_file: PathBuf,
    pub line_number: usize,
    pub old_text: String,
    pub new_text: String,
}

fn backup_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".backup");
    PathBuf::from(s)
}

fn set_owner_only(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}

/// Substitute the first occurrence of `old_text` with `new_text` on `line`.
/// Returns `None` (no-op) when `old_text` isn't present.
fn apply_edit_to_line(line: &str, old_text: &str, new_text: &str) -> Option<String> {
    line.find(old_text).map(|idx| {
        let mut out = String::with_capacity(line.len());
        out.push_str(&line[..idx]);
        out.push_str(new_text);
        out.push_str(&line[idx + old_text.len()..]);
        out
    })
}

fn apply_edits_to_content(content: &str, mut edits: Vec<PendingEdit>) -> String {
    // descending line order keeps later line indices stable while earlier
    // lines in the same file are edited
    edits.sort_by(|a, b| b.line_number.cmp(&a.line_number));

    let uses_crlf = content.contains("\r\n");
    let mut lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();

    for edit in edits {
        if edit.line_number == 0 || edit.line_number > lines.len() {
            continue;
        }
        let idx = edit.line_number - 1;
        if let Some(replaced) = apply_edit_to_line(&lines[idx], &edit.old_text, &edit.new_text) {
            lines[idx] = replaced;
        }
    }

    let sep = if uses_crlf { "\r\n" } else { "\n" };
    let mut out = lines.join(sep);
    if content.ends_with('\n') {
        out.push_str(sep);
    }
    out
}

/// Apply every `edits` entry, grouped by source file, as a single
/// all-or-nothing transaction (spec.md §4.7).
pub fn apply_transaction(edits: Vec<PendingEdit>) -> OcResult<()> {
    let mut by_file: HashMap<PathBuf, Vec<PendingEdit>> = HashMap::new();
    for edit in edits {
        by_file.entry(edit.source_file.clone()).or_default().push(edit);
    }

    let mut backups_taken: Vec<(PathBuf, PathBuf)> = Vec::new();

    let result = (|| -> OcResult<()> {
        for (file, file_edits) in &by_file {
            let original = std::fs::read_to_string(file)
                .map_err(|e| OcError::FileRead { path: file.clone(), source: e })?;

            let backup = backup_path(file);
            std::fs::write(&backup, &original)
                .map_err(|e| OcError::FileWrite { path: backup.clone(), source: e })?;
            set_owner_only(&backup).map_err(|e| OcError::FileWrite { path: backup.clone(), source: e })?;
            backups_taken.push((file.clone(), backup));

            let new_content = apply_edits_to_content(&original, file_edits.clone());

            std::fs::write(file, &new_content)
                .map_err(|e| OcError::FileWrite { path: file.clone(), source: e })?;
            set_owner_only(file).map_err(|e| OcError::FileWrite { path: file.clone(), source: e })?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            for (_file, backup) in &backups_taken {
                let _ = std::fs::remove_file(backup);
            }
            Ok(())
        }
        Err(err) => {
            for (file, backup) in &backups_taken {
                if let Ok(original) = std::fs::read(backup) {
                    let _ = std::fs::write(file, original);
                }
                let _ = std::fs::remove_file(backup);
            }
            Err(err)
        }
    }
}
