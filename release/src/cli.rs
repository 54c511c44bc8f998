//! CLI argument definitions for the release tools.
//!
//! Both binaries accept `--root`; without it they search upwards from the
//! current directory for a checkout containing `component/`.

use crate::packer::BuildConfiguration;
use camino::Utf8PathBuf;
use clap::Parser;

/// Generate the Markdown third-party notices from the license index.
#[derive(Parser, Debug, Default)]
#[command(name = "fb2k-generate-third-party")]
#[command(
    version,
    about = "Generate MD license file based on the folder with licenses"
)]
pub struct GenerateCli {
    /// Repository root [default: nearest ancestor containing `component/`].
    #[arg(long, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,
}

/// Package the component into a `.fb2k-component` archive.
#[derive(Parser, Debug, Default)]
#[command(name = "fb2k-pack-component")]
#[command(version, about = "Pack component to .fb2k-component")]
#[command(after_help = concat!(
    "Release builds also produce <component>_pdb.zip holding the debug symbols;\n",
    "debug builds embed them in the component archive instead.",
))]
pub struct PackCli {
    /// Package the debug build instead of the release build.
    #[arg(long)]
    pub debug: bool,

    /// Repository root [default: nearest ancestor containing `component/`].
    #[arg(long, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,
}

impl PackCli {
    /// The build configuration selected by `--debug`.
    #[must_use]
    pub const fn configuration(&self) -> BuildConfiguration {
        BuildConfiguration::from_debug_flag(self.debug)
    }
}
