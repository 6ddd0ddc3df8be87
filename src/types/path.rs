//! Path de datos con helpers.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Wrapper para paths con helpers de documentación.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPath {
    inner: PathBuf,
}

impl DataPath {
    /// Crea nuevo DataPath.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { inner: path.into() }
    }

    /// Inner PathBuf.
    pub fn inner(&self) -> &PathBuf {
        &self.inner
    }

    /// ¿Es archivo Markdown? (`.md` o `.markdown`).
    pub fn is_markdown(&self) -> bool {
        matches!(
            self.inner.extension().and_then(|e| e.to_str()),
            Some("md") | Some("markdown")
        )
    }

    /// ¿Está bajo un directorio `content/`?
    pub fn is_in_content_root(&self) -> bool {
        self.inner.components().any(|c| c.as_os_str() == "content")
    }

    /// Nombre de archivo sin extensión.
    pub fn stem(&self) -> Option<&OsStr> {
        self.inner.file_stem()
    }
}

impl std::ops::Deref for DataPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<Path> for DataPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl AsRef<OsStr> for DataPath {
    fn as_ref(&self) -> &OsStr {
        self.inner.as_os_str()
    }
}

impl From<PathBuf> for DataPath {
    fn from(path: PathBuf) -> Self {
        Self { inner: path }
    }
}

impl From<&Path> for DataPath {
    fn from(path: &Path) -> Self {
        Self {
            inner: path.to_path_buf(),
        }
    }
}

impl From<String> for DataPath {
    fn from(s: String) -> Self {
        Self {
            inner: PathBuf::from(s),
        }
    }
}

impl From<&str> for DataPath {
    fn from(s: &str) -> Self {
        Self {
            inner: PathBuf::from(s),
        }
    }
}

impl std::fmt::Display for DataPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        let p = DataPath::new("test.md");
        assert!(p.is_markdown());

        let p = DataPath::new("test.markdown");
        assert!(p.is_markdown());

        let p = DataPath::new("test.txt");
        assert!(!p.is_markdown());
    }

    #[test]
    fn test_is_in_content_root() {
        let p = DataPath::new("content/en/guide/source.md");
        assert!(p.is_in_content_root());

        let p = DataPath::new("static/assets/logo.png");
        assert!(!p.is_in_content_root());
    }
}
