//! License index parsing.
//!
//! The index maps each bundled dependency to its license identifier, one
//! `<name>: <license>` pair per line. Blank lines are ignored.

use crate::error::{ReleaseError, Result};
use camino::Utf8Path;
use log::{debug, warn};
use std::collections::{BTreeSet, HashSet};

const SEPARATOR: &str = ": ";

/// One dependency declared in the license index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    /// Dependency name; matches the stem of its license file.
    pub name: String,
    /// License identifier shown next to the name, e.g. `MIT`.
    pub license: String,
}

impl LicenseEntry {
    /// Create an entry from a name and license identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: license.into(),
        }
    }
}

/// The parsed license index, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseIndex {
    entries: Vec<LicenseEntry>,
}

impl LicenseIndex {
    /// Parse index text.
    ///
    /// Each non-blank line is trimmed and split on the first `": "`; the
    /// halves are kept as they are, so `"libfoo :  MIT"` names `"libfoo "`.
    /// The license part may itself contain the separator. Repeated names are
    /// kept, so they produce one bullet each.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MalformedIndexLine`] for a non-blank line
    /// without the separator.
    ///
    /// # Example
    ///
    /// ```
    /// use fb2k_release::notices::LicenseIndex;
    ///
    /// let index = LicenseIndex::parse("libfoo: MIT\n\nlibbar: Apache-2.0\n").unwrap();
    /// let names: Vec<_> = index.entries().iter().map(|e| e.name.as_str()).collect();
    /// assert_eq!(names, ["libfoo", "libbar"]);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let Some((name, license)) = line.split_once(SEPARATOR) else {
                return Err(ReleaseError::MalformedIndexLine {
                    line: number + 1,
                    content: line.to_owned(),
                });
            };

            let entry = LicenseEntry::new(name, license);
            if !seen.insert(entry.name.clone()) {
                warn!("license index declares {} more than once", entry.name);
            }
            debug!("index entry {} ({})", entry.name, entry.license);
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Read and parse the index file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingFile`] if the file does not exist,
    /// [`ReleaseError::Io`] if it cannot be read, or any parse error.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ReleaseError::MissingFile {
                path: path.to_owned(),
            });
        }
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[LicenseEntry] {
        &self.entries
    }

    /// The set of declared dependency names.
    #[must_use]
    pub fn names(&self) -> BTreeSet<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Number of entries, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the index declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
