//! Third-party notices generation.
//!
//! Reads the license index, checks it names exactly the license texts
//! shipped under the component directory, and writes a Markdown document
//! linking to each of them.

pub mod index;
pub mod render;
pub mod validation;

pub use index::{LicenseEntry, LicenseIndex};
pub use render::NoticeDocument;
pub use validation::{compare, ensure_matching, license_stems};

use crate::error::Result;
use crate::files::remove_if_exists;
use camino::{Utf8Path, Utf8PathBuf};
use fb2k_release_common::ReleaseConfig;
use log::info;
use std::fs;

/// Generate the notices document for the repository at `root`.
///
/// Any previously generated document is deleted first, whether or not the
/// run then succeeds. Returns the path of the written document.
///
/// # Errors
///
/// Returns an error if the index is missing or malformed, the licenses
/// directory is missing, the index and license files disagree, or any file
/// operation fails.
pub fn generate_notices(root: &Utf8Path, config: &ReleaseConfig) -> Result<Utf8PathBuf> {
    let output_file = root.join(&config.notices.output_file);
    remove_if_exists(&output_file)?;

    let index = LicenseIndex::load(&root.join(&config.notices.index_file))?;
    let stems = license_stems(&root.join(&config.notices.licenses_dir))?;
    ensure_matching(&index.names(), &stems)?;

    let document = NoticeDocument::render(
        &config.product_name,
        &config.notices.licenses_dir,
        &index,
    );
    fs::write(&output_file, document.as_str())?;

    info!(
        "wrote {} notice(s) to {output_file}",
        index.entries().len()
    );
    Ok(output_file)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
