//! Third-party notices generator.
//!
//! Thin CLI wrapper around [`fb2k_release::notices::generate_notices`],
//! reporting progress through the shared start/success/failure wrapper.

use clap::Parser;
use fb2k_release::Result;
use fb2k_release::cli::GenerateCli;
use fb2k_release::notices::generate_notices;
use fb2k_release_common::{CallReport, ReleaseConfig, exit_code, resolve_root};
use std::io::Write;

const REPORT: CallReport<'static> = CallReport::new(
    "Generating MD license file",
    "Generating MD license file: success",
    "Generating MD license file: failure!",
);

fn main() {
    let cli = GenerateCli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let result = REPORT.run(&mut stderr, || run(&cli, &mut stdout));
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Resolve the checkout, generate the notices, and report the written file.
fn run(cli: &GenerateCli, stdout: &mut dyn Write) -> Result<()> {
    let root = resolve_root(cli.root.as_deref())?;
    let config = ReleaseConfig::load(&root)?;
    let output = generate_notices(&root, &config)?;
    writeln!(stdout, "Generated file: {output}")?;
    Ok(())
}
