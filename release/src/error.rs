//! Error types for notice generation and component packaging.
//!
//! Every failure is terminal for the invocation: the binaries report the
//! error through the run-and-report wrapper and exit non-zero. Variants carry
//! the offending path or line so the message alone is enough to fix the
//! checkout.

use camino::Utf8PathBuf;
use fb2k_release_common::{ConfigError, RepoError};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while generating notices or packing the component.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// `release.toml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The repository root could not be located.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// A non-blank index line lacks the `": "` separator.
    #[error("malformed license index line {line}: {content:?} (expected `<name>: <license>`)")]
    MalformedIndexLine {
        /// One-based line number in the index file.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The license index and the license files disagree.
    #[error("license file mismatch:\n{0}")]
    LicenseMismatch(LicenseMismatch),

    /// A directory the run depends on does not exist.
    #[error("directory not found: {path}")]
    MissingDirectory {
        /// Path of the missing directory.
        path: Utf8PathBuf,
    },

    /// A file the run depends on does not exist.
    #[error("file not found: {path}")]
    MissingFile {
        /// Path of the missing file.
        path: Utf8PathBuf,
    },

    /// A path met during traversal is not valid UTF-8.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(std::path::PathBuf),

    /// Walking the component directory failed.
    #[error("failed to walk component directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing a zip archive failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Names present on only one side of the index/license-file comparison.
///
/// Together the two sets are exactly the symmetric difference between the
/// dependency names declared in the index and the stems of the license files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseMismatch {
    /// Names declared in the index without a matching license file.
    pub index_only: BTreeSet<String>,
    /// License file stems with no matching index entry.
    pub files_only: BTreeSet<String>,
}

impl LicenseMismatch {
    /// Returns `true` when both sides agree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index_only.is_empty() && self.files_only.is_empty()
    }
}

impl fmt::Display for LicenseMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index: {:?}", self.index_only)?;
        write!(f, "Files: {:?}", self.files_only)
    }
}

/// Result type alias using [`ReleaseError`].
pub type Result<T> = std::result::Result<T, ReleaseError>;
