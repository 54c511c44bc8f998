//! Release tooling for the foo_spotify foobar2000 component.
//!
//! Two independent tasks run from a repository checkout:
//!
//! - [`notices`] - Generate `THIRD_PARTY_NOTICES.md` from the license index
//!   and the license texts under `component/licenses`
//! - [`packer`] - Package build output into a `.fb2k-component` archive and,
//!   for release builds, a separate debug-symbol archive
//!
//! Supporting modules:
//!
//! - [`cli`] - Command-line argument definitions for both binaries
//! - [`error`] - Error types shared by both tasks

pub mod cli;
pub mod error;
mod files;
pub mod notices;
pub mod packer;

pub use error::{LicenseMismatch, ReleaseError, Result};
