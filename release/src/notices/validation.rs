//! Cross-checking the license index against the license texts on disk.

use crate::error::{LicenseMismatch, ReleaseError, Result};
use camino::Utf8Path;
use std::collections::BTreeSet;

/// Extension of license text files.
pub const LICENSE_EXTENSION: &str = "txt";

/// Stems of the `*.txt` files directly inside `dir`.
///
/// Subdirectories and files with other extensions are ignored.
///
/// # Errors
///
/// Returns [`ReleaseError::MissingDirectory`] if `dir` is not a directory,
/// or [`ReleaseError::Io`] if it cannot be listed.
pub fn license_stems(dir: &Utf8Path) -> Result<BTreeSet<String>> {
    if !dir.is_dir() {
        return Err(ReleaseError::MissingDirectory {
            path: dir.to_owned(),
        });
    }

    let mut stems = BTreeSet::new();
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() || path.extension() != Some(LICENSE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            stems.insert(stem.to_owned());
        }
    }
    Ok(stems)
}

/// Names present on only one side of `declared` and `available`.
#[must_use]
pub fn compare(declared: &BTreeSet<String>, available: &BTreeSet<String>) -> LicenseMismatch {
    LicenseMismatch {
        index_only: declared.difference(available).cloned().collect(),
        files_only: available.difference(declared).cloned().collect(),
    }
}

/// Fails unless `declared` and `available` hold the same names.
///
/// # Errors
///
/// Returns [`ReleaseError::LicenseMismatch`] carrying both difference sets.
pub fn ensure_matching(declared: &BTreeSet<String>, available: &BTreeSet<String>) -> Result<()> {
    let mismatch = compare(declared, available);
    if mismatch.is_empty() {
        Ok(())
    } else {
        Err(ReleaseError::LicenseMismatch(mismatch))
    }
}
