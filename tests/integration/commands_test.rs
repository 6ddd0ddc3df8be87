//! Integration tests for the `commands` module (`lint`, `fix`).

use docdoctor_lib::commands::fix::{self, FixCommand};
use docdoctor_lib::commands::lint::{self, LintCommand};
use docdoctor_lib::CliConfig;

mod lint_command_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lint_reports_broken_link() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "[Go](missing.md)\n").unwrap();

        let cmd = LintCommand { path: Some(dir.path().to_path_buf()), errors_only: false, json: false };
        let result = lint::lint(&cmd, &CliConfig::default()).unwrap();

        assert_eq!(result.error_count(), 1);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_lint_clean_tree_is_clean() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.md"),
            "---\ntitle: Home\nlast_updated: \"2026-01-01\"\n---\n",
        )
        .unwrap();

        let cmd = LintCommand { path: Some(dir.path().to_path_buf()), errors_only: false, json: false };
        let result = lint::lint(&cmd, &CliConfig::default()).unwrap();

        assert!(result.is_clean());
    }
}

mod fix_command_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_git(dir: &std::path::Path, args: &[&str]) {
        let status = std::process::Command::new("git").args(args).current_dir(dir).status().unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    #[test]
    fn test_fix_dry_run_does_not_touch_disk() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("My Page.md"), "# Hi\n").unwrap();

        let cmd = FixCommand {
            path: Some(dir.path().to_path_buf()),
            dry_run: true,
            history_depth: 10,
            json: false,
        };
        fix::fix(&cmd, &CliConfig::default()).unwrap();

        assert!(dir.path().join("My Page.md").exists());
    }

    #[test]
    fn test_fix_heals_staged_rename_end_to_end() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.md"), "[Guide](guide.md)\n").unwrap();
        fs::write(dir.path().join("guide.md"), "# Guide\n").unwrap();

        run_git(dir.path(), &["init", "-q"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test"]);
        run_git(dir.path(), &["add", "."]);
        run_git(dir.path(), &["commit", "-q", "-m", "initial"]);
        run_git(dir.path(), &["mv", "guide.md", "user-guide.md"]);

        let cmd = FixCommand {
            path: Some(dir.path().to_path_buf()),
            dry_run: false,
            history_depth: 10,
            json: false,
        };
        let result = fix::fix(&cmd, &CliConfig::default()).unwrap();

        assert!(result.broken_links.is_empty());
        let content = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(content.contains("user-guide.md"));
    }
}
