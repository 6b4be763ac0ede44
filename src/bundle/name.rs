//! Bundle name normalization
//!
//! Turns the short name a user types (`ruby`, `textmate/ruby.tmbundle`,
//! `Foo-TmBundle`) into the directory name a bundle is installed under and
//! the GitHub repository it is cloned from.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Canonical suffix of an installed bundle directory
pub const BUNDLE_SUFFIX: &str = ".tmbundle";

/// Host bundles are cloned from
pub const GIT_HOST: &str = "github.com";

/// A separator (`.`, `-` or `_`) followed by `tmbundle`, at the end, any case
#[allow(clippy::unwrap_used)]
static SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[._-]tmbundle$").unwrap());

/// A bundle name as supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleName {
    raw: String,
}

impl BundleName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Directory name the bundle is installed under.
    ///
    /// Any accepted suffix spelling is replaced by a single `.tmbundle` and
    /// directory components are dropped.
    pub fn install_name(&self) -> String {
        let stem = SUFFIX_PATTERN.replace(&self.raw, "");
        let normalized = format!("{stem}{BUNDLE_SUFFIX}");
        Path::new(&normalized)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| normalized.clone())
    }

    /// Repository path on the git host.
    ///
    /// Unlike [`install_name`](Self::install_name) this keeps a `-tmbundle`
    /// or `_tmbundle` suffix as typed.
    pub fn repo_name(&self) -> String {
        if SUFFIX_PATTERN.is_match(&self.raw) {
            self.raw.clone()
        } else {
            format!("{}{BUNDLE_SUFFIX}", self.raw)
        }
    }

    pub fn git_url(&self) -> String {
        format!("https://{GIT_HOST}/{}.git", self.repo_name())
    }
}

impl std::fmt::Display for BundleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
