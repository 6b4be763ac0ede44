//! File system errors

use super::TmBundleError;

/// Creates a bundles directory read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> TmBundleError {
    TmBundleError::BundlesDirReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

