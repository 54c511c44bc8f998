//! Shared plumbing for the fb2k release tools.
//!
//! The notice generator and the component packer both run from a repository
//! checkout, read the same optional `release.toml`, and report their progress
//! through the same start/success/failure wrapper. Those pieces live here so
//! the two binaries stay thin.
//!
//! # Modules
//!
//! - [`call_wrapper`] - Start/success/failure reporting around a task
//! - [`config`] - `release.toml` loading with defaults
//! - [`repo`] - Repository root discovery

pub mod call_wrapper;
pub mod config;
pub mod repo;

pub use call_wrapper::{CallReport, exit_code};
pub use config::{CONFIG_FILE_NAME, ConfigError, NoticesConfig, ReleaseConfig};
pub use repo::{COMPONENT_DIR, RepoError, discover_root, is_repo_root, resolve_root};
