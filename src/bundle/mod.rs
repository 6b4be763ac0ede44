//! Installed bundles and bundle names
//!
//! - [`Bundle`]: an installed bundle directory
//! - [`BundleName`]: a user-supplied name to install from
//! - [`BundleRepository`]: enumeration of the bundles directory

pub mod name;
pub mod repository;

use std::path::{Path, PathBuf};

pub use name::BundleName;
pub use repository::BundleRepository;

use name::BUNDLE_SUFFIX;

/// Marker whose presence makes a bundle a git checkout
pub const GIT_MARKER: &str = ".git";

/// An installed bundle directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    path: PathBuf,
    name: String,
}

impl Bundle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory name with the `.tmbundle` suffix stripped
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the bundle was installed from git and can be pulled
    pub fn is_git_checkout(&self) -> bool {
        self.path.join(GIT_MARKER).exists()
    }
}

fn display_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(BUNDLE_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}
