//! Install operation

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::BundleName;
use crate::error::{Result, clone_failed};
use crate::process::{ProcessRunner, git};

/// Clone `name` from GitHub into `bundles_dir`.
///
/// An existing directory at the install path is left for git to reject.
pub fn install_bundle(
    name: &BundleName,
    bundles_dir: &Path,
    runner: &dyn ProcessRunner,
) -> Result<PathBuf> {
    let install_path = bundles_dir.join(name.install_name());
    let url = name.git_url();
    debug!("Installing {} from {} into {}", name, url, install_path.display());

    let status = runner.run(&git::clone(&url, &install_path))?;
    if !status.success() {
        return Err(clone_failed(
            url,
            install_path.display().to_string(),
            status.code,
        ));
    }

    Ok(install_path)
}
