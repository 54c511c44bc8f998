//! Paths read and written by one packing run.

use super::configuration::BuildConfiguration;
use camino::{Utf8Path, Utf8PathBuf};
use fb2k_release_common::{COMPONENT_DIR, ReleaseConfig};

/// Extension of the foobar2000 component archive.
pub const COMPONENT_ARCHIVE_EXTENSION: &str = "fb2k-component";

/// Input and output locations for packaging one build configuration.
///
/// ```text
/// <root>/
///   component/                 copied into the archive
///   LICENSE
///   CHANGELOG.md
///   <result_dir>/<platform>_<Configuration>/
///     bin/<component>.dll
///     dbginfo/<component>.pdb
///     <component>.fb2k-component   (written)
///     <component>_pdb.zip          (written, release only)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactLayout {
    /// Configuration the layout was resolved for.
    pub configuration: BuildConfiguration,
    /// Build output directory; archives are written here too.
    pub output_dir: Utf8PathBuf,
    /// Tree whose contents are copied into the archive.
    pub component_dir: Utf8PathBuf,
    /// Repository license.
    pub license: Utf8PathBuf,
    /// Repository changelog.
    pub changelog: Utf8PathBuf,
    /// Compiled component binary.
    pub binary: Utf8PathBuf,
    /// Debug-symbol file for the binary.
    pub debug_symbols: Utf8PathBuf,
    /// The component archive to write.
    pub component_archive: Utf8PathBuf,
    /// The separate debug-symbol archive written for release builds.
    pub symbols_archive: Utf8PathBuf,
}

impl ArtefactLayout {
    /// Resolve the layout of the repository at `root`.
    #[must_use]
    pub fn resolve(
        root: &Utf8Path,
        config: &ReleaseConfig,
        configuration: BuildConfiguration,
    ) -> Self {
        let name = &config.component_name;
        let output_dir = root
            .join(&config.result_dir)
            .join(configuration.output_dir_name(&config.platform));

        Self {
            configuration,
            component_dir: root.join(COMPONENT_DIR),
            license: root.join("LICENSE"),
            changelog: root.join("CHANGELOG.md"),
            binary: output_dir.join("bin").join(format!("{name}.dll")),
            debug_symbols: output_dir.join("dbginfo").join(format!("{name}.pdb")),
            component_archive: output_dir.join(format!("{name}.{COMPONENT_ARCHIVE_EXTENSION}")),
            symbols_archive: output_dir.join(format!("{name}_pdb.zip")),
            output_dir,
        }
    }

    /// Files placed at the root of the component archive after the
    /// component tree, in archive order.
    #[must_use]
    pub fn root_files(&self) -> Vec<&Utf8Path> {
        let mut files = vec![
            self.license.as_path(),
            self.changelog.as_path(),
            self.binary.as_path(),
        ];
        if self.configuration.is_debug() {
            files.push(self.debug_symbols.as_path());
        }
        files
    }

    /// Every input file that must exist before anything is written.
    #[must_use]
    pub fn required_files(&self) -> [&Utf8Path; 4] {
        [
            self.license.as_path(),
            self.changelog.as_path(),
            self.binary.as_path(),
            self.debug_symbols.as_path(),
        ]
    }
}
