//! Install command implementation

use console::Style;

use crate::bundle::BundleName;
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::install::install_bundle;
use crate::paths;
use crate::process::SystemRunner;

use super::EXIT_OK;

/// Run install command
pub fn run(args: InstallArgs) -> Result<i32> {
    let name = BundleName::new(args.name);
    let path = install_bundle(&name, &paths::bundles_dir()?, &SystemRunner)?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Installed"),
        path.display()
    );
    Ok(EXIT_OK)
}
