//! Release configuration loaded from `release.toml`.
//!
//! The file is optional and lives at the repository root. Every field falls
//! back to the values the foo_spotify repository uses, so a checkout without
//! a `release.toml` needs no configuration at all.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

/// File name of the optional configuration at the repository root.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Errors raised while loading `release.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("invalid {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// The underlying deserialisation error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by the notice generator and the component packer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Human-readable product name used in the notices preamble.
    pub product_name: String,
    /// Base name of the compiled component (`<name>.dll`, `<name>.pdb`).
    pub component_name: String,
    /// Platform prefix of the build output directory (`Win32_Release`).
    pub platform: String,
    /// Directory under the root that holds per-configuration build output.
    pub result_dir: Utf8PathBuf,
    /// Paths used by the notice generator.
    pub notices: NoticesConfig,
}

impl ReleaseConfig {
    /// Load `release.toml` from `root`, or the defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read and
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(root: &Utf8Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("no {CONFIG_FILE_NAME} at {root}; using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&path, &content)
    }

    /// Parse configuration text; `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `content` is malformed.
    pub fn from_toml(path: &Utf8Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            product_name: "Spotify Integration".to_owned(),
            component_name: "foo_spotify".to_owned(),
            platform: "Win32".to_owned(),
            result_dir: Utf8PathBuf::from("_result"),
            notices: NoticesConfig::default(),
        }
    }
}

/// Locations read and written by the notice generator, relative to the root.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NoticesConfig {
    /// The `<name>: <license>` index file.
    pub index_file: Utf8PathBuf,
    /// Directory holding one `<name>.txt` license text per dependency.
    ///
    /// Bullets in the generated document link into this directory, so it
    /// should stay relative to the root.
    pub licenses_dir: Utf8PathBuf,
    /// The generated Markdown document.
    pub output_file: Utf8PathBuf,
}

impl Default for NoticesConfig {
    fn default() -> Self {
        Self {
            index_file: Utf8PathBuf::from(".license_index.txt"),
            licenses_dir: Utf8PathBuf::from("component/licenses"),
            output_file: Utf8PathBuf::from("THIRD_PARTY_NOTICES.md"),
        }
    }
}
