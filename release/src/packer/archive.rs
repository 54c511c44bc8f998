//! Zip archive writing.
//!
//! Archives are assembled in a temporary file beside the destination and
//! renamed over it only once every entry has been written, so a failed run
//! never leaves a truncated archive behind.

use crate::error::{ReleaseError, Result};
use crate::files::remove_if_exists;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs::File;
use std::io;
use tempfile::NamedTempFile;
use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Prefix marking hidden files and directories.
pub const HIDDEN_MARKER: char = '.';

/// Deflate level used for the component archive.
pub const MAX_COMPRESSION: i64 = 9;

/// A zip archive being written to `destination`.
pub struct ArchiveWriter {
    zip: ZipWriter<NamedTempFile>,
    destination: Utf8PathBuf,
    options: SimpleFileOptions,
    entries: Vec<String>,
}

impl ArchiveWriter {
    /// Start a Deflate-compressed archive at `destination`.
    ///
    /// Any existing file at `destination` is removed first. `level` selects
    /// the Deflate level; `None` uses the library default.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Io`] if the old archive cannot be removed or
    /// the temporary file cannot be created.
    pub fn create(destination: &Utf8Path, level: Option<i64>) -> Result<Self> {
        remove_if_exists(destination)?;

        let dir = destination
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let temp = tempfile::Builder::new()
            .prefix(".")
            .suffix(".partial")
            .tempfile_in(dir)?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(level);

        Ok(Self {
            zip: ZipWriter::new(temp),
            destination: destination.to_owned(),
            options,
            entries: Vec::new(),
        })
    }

    /// Copy `source` into the archive as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingFile`] if `source` is not a file, or
    /// an I/O or archive error if copying fails.
    pub fn add_file(&mut self, source: &Utf8Path, name: &str) -> Result<()> {
        if !source.is_file() {
            return Err(ReleaseError::MissingFile {
                path: source.to_owned(),
            });
        }

        let mut file = File::open(source)?;
        self.zip.start_file(name, self.options)?;
        io::copy(&mut file, &mut self.zip)?;

        debug!("{} <- {source}", self.destination.file_name().unwrap_or(""));
        self.entries.push(name.to_owned());
        Ok(())
    }

    /// Copy `source` into the archive root under its own file name.
    ///
    /// # Errors
    ///
    /// As for [`Self::add_file`].
    pub fn add_file_at_root(&mut self, source: &Utf8Path) -> Result<()> {
        let name = source.file_name().ok_or_else(|| ReleaseError::MissingFile {
            path: source.to_owned(),
        })?;
        self.add_file(source, name)
    }

    /// Copy the tree under `dir` into the archive, keeping paths relative
    /// to `dir`.
    ///
    /// Directories become `name/` entries so empty ones survive. Any file
    /// or directory whose own name starts with [`HIDDEN_MARKER`] gets no
    /// entry, but the contents of a hidden directory are still walked and
    /// visible entries inside it are kept. Entries are added in file-name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingDirectory`] if `dir` is not a
    /// directory, or a walk, I/O, or archive error.
    pub fn add_tree(&mut self, dir: &Utf8Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(ReleaseError::MissingDirectory {
                path: dir.to_owned(),
            });
        }

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if is_hidden(&entry) {
                continue;
            }

            let path = Utf8Path::from_path(entry.path())
                .ok_or_else(|| ReleaseError::NonUtf8Path(entry.path().to_path_buf()))?;
            let relative = path
                .strip_prefix(dir)
                .map_err(|_| ReleaseError::NonUtf8Path(entry.path().to_path_buf()))?;
            let name = archive_name(relative);

            if entry.file_type().is_dir() {
                self.add_directory(&name)?;
            } else if entry.file_type().is_file() {
                self.add_file(path, &name)?;
            }
        }
        Ok(())
    }

    fn add_directory(&mut self, name: &str) -> Result<()> {
        let name = format!("{name}/");
        self.zip.add_directory(name.as_str(), self.options)?;
        self.entries.push(name);
        Ok(())
    }

    /// Names written so far, in archive order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Finish the archive and move it into place.
    ///
    /// # Errors
    ///
    /// Returns an archive error if the central directory cannot be written,
    /// or [`ReleaseError::Io`] if the archive cannot be moved into place.
    pub fn finish(self) -> Result<Utf8PathBuf> {
        let temp = self.zip.finish()?;
        temp.persist(&self.destination).map_err(|e| e.error)?;
        debug!(
            "{} complete with {} entries",
            self.destination,
            self.entries.len()
        );
        Ok(self.destination)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with(HIDDEN_MARKER))
}

/// Archive entry name for `relative`, always `/`-separated.
fn archive_name(relative: &Utf8Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Utf8Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
