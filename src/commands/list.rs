//! List command implementation
//!
//! This command lists the installed bundles in enumeration order.

use console::Style;

use crate::bundle::{Bundle, BundleRepository};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::paths;

use super::EXIT_OK;

/// Run list command
pub fn run(args: ListArgs) -> Result<i32> {
    let repository = BundleRepository::new(paths::bundles_dir()?);
    list_bundles(repository.list()?, args.detailed);
    Ok(EXIT_OK)
}

fn list_bundles(bundles: &[Bundle], detailed: bool) {
    if bundles.is_empty() {
        println!("No bundles installed.");
        return;
    }

    println!("Installed bundles ({}):", bundles.len());
    println!();

    for bundle in bundles {
        println!("  {}", Style::new().bold().yellow().apply_to(bundle.name()));
        if detailed {
            display_bundle_detailed(bundle);
        }
    }
}

fn display_bundle_detailed(bundle: &Bundle) {
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Path:"),
        bundle.path().display()
    );
    let source = if bundle.is_git_checkout() {
        Style::new().green().apply_to("git")
    } else {
        Style::new().dim().apply_to("not a Git repo")
    };
    println!("    {} {}", Style::new().bold().apply_to("Source:"), source);
}
