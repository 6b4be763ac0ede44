//! Bundles directory location

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Result, TmBundleError};

/// Bundles directory relative to the user's home directory
const BUNDLES_SUBDIR: &str = "Library/Application Support/Avian/Bundles";

static BUNDLES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the bundles directory path
///
/// Resolved from the home directory on first use and cached for the rest of
/// the process.
pub fn bundles_dir() -> Result<PathBuf> {
    if let Some(dir) = BUNDLES_DIR.get() {
        return Ok(dir.clone());
    }
    let home = dirs::home_dir().ok_or(TmBundleError::HomeDirUnavailable)?;
    Ok(BUNDLES_DIR.get_or_init(|| home.join(BUNDLES_SUBDIR)).clone())
}
