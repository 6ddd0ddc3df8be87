//! Error types for docdoctor.
//!
//! A single enum centralizes every fallible outcome in the crate, the way
//! `oc_diagdoc` does it, with an `exit_code()` banding used by `main.rs`.

use std::path::PathBuf;
use thiserror::Error;

/// Standard result alias used throughout the crate.
pub type OcResult<T> = Result<T, OcError>;

/// Main error type.
#[derive(Error, Debug)]
pub enum OcError {
    // ─────────────────────────────────────────────────────────────────
    // Filesystem errors
    // ─────────────────────────────────────────────────────────────────
    #[error("error reading file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    // ─────────────────────────────────────────────────────────────────
    // YAML / frontmatter errors
    // ─────────────────────────────────────────────────────────────────
    #[error("invalid YAML in {path}: {message}")]
    YamlParse { path: PathBuf, message: String },

    #[error("missing frontmatter in {0}")]
    MissingFrontmatter(PathBuf),

    #[error("missing required field '{field}' in {path}")]
    MissingField { field: String, path: PathBuf },

    // ─────────────────────────────────────────────────────────────────
    // Link-healing errors
    // ─────────────────────────────────────────────────────────────────
    #[error("broken link '{link}' in {file_path}")]
    BrokenLink { link: String, file_path: PathBuf },

    #[error("invalid rename mapping '{from}' -> '{to}': {reason}")]
    InvalidMapping {
        from: String,
        to: String,
        reason: String,
    },

    #[error("error parsing Markdown in {path}: {message}")]
    MarkdownParse { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────────
    // VCS errors
    // ─────────────────────────────────────────────────────────────────
    #[error("git command failed ({args}): {message}")]
    Vcs { args: String, message: String },

    #[error("no git repository found at {0}")]
    VcsNotFound(PathBuf),

    // ─────────────────────────────────────────────────────────────────
    // Cancellation
    // ─────────────────────────────────────────────────────────────────
    #[error("operation cancelled")]
    Cancelled,

    // ─────────────────────────────────────────────────────────────────
    // CLI / user errors
    // ─────────────────────────────────────────────────────────────────
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────────
    // Generic
    // ─────────────────────────────────────────────────────────────────
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OcError {
    /// CLI exit code band for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors (1-9)
            Self::InvalidArgument(_) | Self::UnknownCommand(_) => 1,

            // File errors (10-19)
            Self::FileNotFound(_) | Self::DirectoryNotFound(_) => 10,
            Self::FileRead { .. } | Self::FileWrite { .. } => 11,

            // Parsing errors (20-29)
            Self::YamlParse { .. } | Self::MissingFrontmatter(_) | Self::MissingField { .. } => 21,
            Self::MarkdownParse { .. } => 22,

            // Link-healing errors (30-39)
            Self::BrokenLink { .. } => 30,
            Self::InvalidMapping { .. } => 33,

            // VCS errors (40-49)
            Self::Vcs { .. } | Self::VcsNotFound(_) => 40,

            // Cancellation (50-59)
            Self::Cancelled => 50,

            // Everything else (90-99)
            _ => 99,
        }
    }

    /// Whether this error represents a recoverable-and-reportable condition
    /// rather than a hard failure (used by `lint` to keep scanning).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::BrokenLink { .. } | Self::MissingField { .. })
    }
}

/// Build an `OcError::Custom` quickly.
#[macro_export]
macro_rules! oc_err {
    ($msg:expr) => {
        $crate::errors::OcError::Custom($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::errors::OcError::Custom(format!($fmt, $($arg)*))
    };
}

/// Return early with an `OcError::Custom`.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::oc_err!($($arg)*))
    };
}
