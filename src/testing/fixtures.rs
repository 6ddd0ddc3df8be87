//! Test fixtures: real git repositories and Hugo-style Markdown content,
//! for exercising the rename-healing engine end to end.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn run_git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git invocation failed; is git installed?");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// A temp directory wired up as a real git repository. Backs the `Fix`
/// scenarios that need actual `git diff`/`git log`/`git mv` behavior rather
/// than a `FakeVcs` double.
pub struct GitRepo {
    temp_dir: TempDir,
}

impl GitRepo {
    pub fn init() -> std::io::Result<Self> {
        let temp_dir = TempDir::new()?;
        run_git(temp_dir.path(), &["init", "-q"]);
        run_git(temp_dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(temp_dir.path(), &["config", "user.name", "Test"]);
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `relpath`, creating parent directories as needed.
    pub fn write(&self, relpath: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(relpath);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// `git add .` then `git commit`.
    pub fn commit_all(&self, message: &str) {
        run_git(self.path(), &["add", "."]);
        run_git(self.path(), &["commit", "-q", "-m", message]);
    }

    /// `git mv`, staging a rename without committing it.
    pub fn mv(&self, from: &str, to: &str) {
        if let Some(parent) = self.path().join(to).parent() {
            std::fs::create_dir_all(parent).ok();
        }
        run_git(self.path(), &["mv", from, to]);
    }
}

/// Minimal Hugo-style frontmatter carrying the two fields the convention
/// checker requires.
pub fn sample_frontmatter(title: &str) -> String {
    format!("---\ntitle: \"{title}\"\nlast_updated: \"2026-01-01\"\n---\n\n# {title}\n")
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "file should exist: {}", path.display());
}

/// Assert that a file's contents contain `text`.
pub fn assert_file_contains(path: &Path, text: &str) {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    assert!(content.contains(text), "{} should contain '{text}'", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_a_git_repo() {
        let repo = GitRepo::init().unwrap();
        assert!(repo.path().join(".git").exists());
    }

    #[test]
    fn write_creates_parent_directories() {
        let repo = GitRepo::init().unwrap();
        let path = repo.write("guide/intro.md", "# Intro\n").unwrap();
        assert_file_exists(&path);
        assert_file_contains(&path, "Intro");
    }

    #[test]
    fn mv_stages_a_rename() {
        let repo = GitRepo::init().unwrap();
        repo.write("old.md", "# Old\n").unwrap();
        repo.commit_all("initial");
        repo.mv("old.md", "new.md");

        let output = Command::new("git")
            .args(["diff", "--name-status", "-M", "HEAD"])
            .current_dir(repo.path())
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with('R'));
        assert!(stdout.contains("new.md"));
    }
}
