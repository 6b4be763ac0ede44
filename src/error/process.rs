//! Subprocess errors

use super::TmBundleError;

/// Creates an error for a program that could not be started
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> TmBundleError {
    TmBundleError::SpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a clone failure carrying git's exit code
pub fn clone_failed(
    url: impl Into<String>,
    path: impl Into<String>,
    code: Option<i32>,
) -> TmBundleError {
    TmBundleError::CloneFailed {
        url: url.into(),
        path: path.into(),
        code,
    }
}
