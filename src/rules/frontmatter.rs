//! Frontmatter conventions: every document carries a YAML block with at
//! least a `title`, and `last_updated` tracks drift against its fingerprint.

use std::path::{Path, PathBuf};

use crate::core::patterns::RE_LAST_UPDATED;

/// A single convention violation found in a file's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterIssue {
    pub path: PathBuf,
    pub message: String,
}

fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// Check `path`'s frontmatter against the convention; returns an empty
/// list when the file is fully compliant.
pub fn check_frontmatter(path: &Path, content: &str) -> Vec<FrontmatterIssue> {
    let mut issues = Vec::new();

    let Some(frontmatter) = extract_frontmatter(content) else {
        issues.push(FrontmatterIssue {
            path: path.to_path_buf(),
            message: "missing frontmatter block".to_string(),
        });
        return issues;
    };

    let parsed: Result<serde_yaml::Value, _> = serde_yaml::from_str(frontmatter);
    let Ok(parsed) = parsed else {
        issues.push(FrontmatterIssue {
            path: path.to_path_buf(),
            message: "frontmatter is not valid YAML".to_string(),
        });
        return issues;
    };

    let has_title = parsed.get("title").is_some_and(|v| v.is_string());
    if !has_title {
        issues.push(FrontmatterIssue {
            path: path.to_path_buf(),
            message: "missing required field 'title'".to_string(),
        });
    }

    if !RE_LAST_UPDATED.is_match(frontmatter) {
        issues.push(FrontmatterIssue {
            path: path.to_path_buf(),
            message: "missing required field 'last_updated'".to_string(),
        });
    }

    issues
}
