//! Enumeration of the bundles directory

use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::debug;
use walkdir::WalkDir;

use super::Bundle;
use crate::error::Result;

/// Installed bundles under a bundles directory.
///
/// The directory is read on the first call to [`list`](Self::list) and the
/// result is reused afterwards.
#[derive(Debug)]
pub struct BundleRepository {
    root: PathBuf,
    bundles: OnceCell<Vec<Bundle>>,
}

impl BundleRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bundles: OnceCell::new(),
        }
    }

    /// Bundles in filesystem enumeration order (not sorted)
    pub fn list(&self) -> Result<&[Bundle]> {
        if let Some(bundles) = self.bundles.get() {
            return Ok(bundles);
        }
        let bundles = self.scan()?;
        Ok(self.bundles.get_or_init(|| bundles))
    }

    fn scan(&self) -> Result<Vec<Bundle>> {
        let mut bundles = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            bundles.push(Bundle::new(entry.into_path()));
        }
        debug!(
            "Found {} bundles in {}",
            bundles.len(),
            self.root.display()
        );
        Ok(bundles)
    }
}
