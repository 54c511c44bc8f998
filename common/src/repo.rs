//! Repository root discovery.
//!
//! The release tools run from anywhere inside a component checkout. The root
//! is recognised by its `component/` directory, which both tools read from.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Directory whose contents ship verbatim inside the component archive.
pub const COMPONENT_DIR: &str = "component";

/// Errors raised while locating the repository root.
#[derive(Debug, Error)]
pub enum RepoError {
    /// No ancestor of the starting directory looks like a repository root.
    #[error("no directory containing `{COMPONENT_DIR}/` found above {start}")]
    RootNotFound {
        /// Directory the search started from.
        start: Utf8PathBuf,
    },

    /// The current directory could not be determined.
    #[error("failed to read the current directory")]
    CurrentDir(#[source] std::io::Error),

    /// The current directory is not valid UTF-8.
    #[error("current directory is not valid UTF-8: {0}")]
    NonUtf8Path(std::path::PathBuf),
}

/// Checks whether `dir` contains a `component/` directory.
#[must_use]
pub fn is_repo_root(dir: &Utf8Path) -> bool {
    dir.join(COMPONENT_DIR).is_dir()
}

/// Returns the first of `start` and its ancestors that is a repository root.
///
/// # Errors
///
/// Returns [`RepoError::RootNotFound`] when no ancestor qualifies.
pub fn discover_root(start: &Utf8Path) -> Result<Utf8PathBuf, RepoError> {
    start
        .ancestors()
        .find(|dir| is_repo_root(dir))
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| RepoError::RootNotFound {
            start: start.to_path_buf(),
        })
}

/// Resolves the root to operate on: `explicit` if given, otherwise the
/// nearest root above the current directory.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable or not UTF-8,
/// or if no root is found above it.
pub fn resolve_root(explicit: Option<&Utf8Path>) -> Result<Utf8PathBuf, RepoError> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(RepoError::CurrentDir)?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| RepoError::NonUtf8Path(e.into_path_buf()))?;
    discover_root(&cwd)
}
