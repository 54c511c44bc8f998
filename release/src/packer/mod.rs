//! Component packaging.
//!
//! Builds the `.fb2k-component` archive foobar2000 installs from: the
//! contents of the repository's `component/` tree plus the license,
//! changelog, and compiled binary at the archive root. Debug builds carry
//! their debug symbols inside the component; release builds get a separate
//! symbols archive instead.

pub mod archive;
pub mod configuration;
pub mod layout;

pub use archive::{ArchiveWriter, HIDDEN_MARKER, MAX_COMPRESSION};
pub use configuration::BuildConfiguration;
pub use layout::{ArtefactLayout, COMPONENT_ARCHIVE_EXTENSION};

use crate::error::{ReleaseError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use fb2k_release_common::ReleaseConfig;
use log::info;

/// Archives produced by [`pack_component`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    /// The `.fb2k-component` archive.
    pub component_archive: Utf8PathBuf,
    /// The debug-symbol archive; only written for release builds.
    pub symbols_archive: Option<Utf8PathBuf>,
}

impl PackOutput {
    /// Every archive written, component archive first.
    pub fn archives(&self) -> impl Iterator<Item = &Utf8Path> {
        std::iter::once(self.component_archive.as_path()).chain(self.symbols_archive.as_deref())
    }
}

/// Package the build output of `configuration` for the repository at `root`.
///
/// All inputs are checked before any archive is touched.
///
/// # Errors
///
/// Returns [`ReleaseError::MissingDirectory`] if the build output or
/// component directory is missing, [`ReleaseError::MissingFile`] if a
/// required input file is missing, or an I/O, walk, or archive error.
pub fn pack_component(
    root: &Utf8Path,
    config: &ReleaseConfig,
    configuration: BuildConfiguration,
) -> Result<PackOutput> {
    let layout = ArtefactLayout::resolve(root, config, configuration);
    check_inputs(&layout)?;

    let component_archive = write_component_archive(&layout)?;
    info!("generated {component_archive}");

    let symbols_archive = if configuration.is_debug() {
        None
    } else {
        let path = write_symbols_archive(&layout)?;
        info!("generated {path}");
        Some(path)
    };

    Ok(PackOutput {
        component_archive,
        symbols_archive,
    })
}

/// Fails unless every directory and file the layout reads is present.
///
/// # Errors
///
/// Returns the first missing directory or file.
pub fn check_inputs(layout: &ArtefactLayout) -> Result<()> {
    for dir in [&layout.output_dir, &layout.component_dir] {
        if !dir.is_dir() {
            return Err(ReleaseError::MissingDirectory { path: dir.clone() });
        }
    }
    for file in layout.required_files() {
        if !file.is_file() {
            return Err(ReleaseError::MissingFile {
                path: file.to_owned(),
            });
        }
    }
    Ok(())
}

fn write_component_archive(layout: &ArtefactLayout) -> Result<Utf8PathBuf> {
    let mut writer = ArchiveWriter::create(&layout.component_archive, Some(MAX_COMPRESSION))?;
    writer.add_tree(&layout.component_dir)?;
    for file in layout.root_files() {
        writer.add_file_at_root(file)?;
    }
    writer.finish()
}

fn write_symbols_archive(layout: &ArtefactLayout) -> Result<Utf8PathBuf> {
    let mut writer = ArchiveWriter::create(&layout.symbols_archive, None)?;
    writer.add_file_at_root(&layout.debug_symbols)?;
    writer.finish()
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;
