//! Component packer.
//!
//! Thin CLI wrapper around [`fb2k_release::packer::pack_component`],
//! reporting progress through the shared start/success/failure wrapper.

use clap::Parser;
use fb2k_release::Result;
use fb2k_release::cli::PackCli;
use fb2k_release::packer::pack_component;
use fb2k_release_common::{CallReport, ReleaseConfig, exit_code, resolve_root};
use std::io::Write;

const REPORT: CallReport<'static> = CallReport::new(
    "Packing component",
    "Packing component: success",
    "Packing component: failure!",
);

fn main() {
    let cli = PackCli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let result = REPORT.run(&mut stderr, || run(&cli, &mut stdout));
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Resolve the checkout, package the selected build, and report each archive.
fn run(cli: &PackCli, stdout: &mut dyn Write) -> Result<()> {
    let root = resolve_root(cli.root.as_deref())?;
    let config = ReleaseConfig::load(&root)?;
    let output = pack_component(&root, &config, cli.configuration())?;
    for archive in output.archives() {
        writeln!(stdout, "Generated file: {archive}")?;
    }
    Ok(())
}
