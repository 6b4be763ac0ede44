//! Error types and handling for tmbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`fs`]: Bundles directory and file system errors
//! - [`process`]: Subprocess errors (git, editor, signal handler)

pub mod fs;
pub mod process;

pub use fs::read_failed as bundles_dir_read_failed;
pub use process::{clone_failed, spawn_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tmbundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum TmBundleError {
    // File system errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(tmbundle::fs::no_home),
        help("Set the HOME environment variable")
    )]
    HomeDirUnavailable,

    #[error("Failed to read bundles directory: {path}: {reason}")]
    #[diagnostic(
        code(tmbundle::fs::read_failed),
        help("Check that the bundles directory exists and is readable")
    )]
    BundlesDirReadFailed { path: String, reason: String },

    // Matching errors
    #[error("Invalid bundle pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(tmbundle::edit::invalid_pattern),
        help("The partial name is matched as a regular expression against bundle names")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Process errors
    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(tmbundle::process::spawn_failed),
        help("Check that the program is installed and on your PATH")
    )]
    SpawnFailed { program: String, reason: String },

    #[error("Failed to clone repository: {url} into {path}")]
    #[diagnostic(
        code(tmbundle::git::clone_failed),
        help("Check that the bundle exists on GitHub and is not already installed")
    )]
    CloneFailed {
        url: String,
        path: String,
        code: Option<i32>,
    },

    #[error("Failed to install interrupt handler: {reason}")]
    #[diagnostic(code(tmbundle::process::signal_handler))]
    SignalHandlerFailed { reason: String },
}

impl TmBundleError {
    /// Exit code the process should terminate with for this error.
    ///
    /// Clone failures adopt git's own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            TmBundleError::CloneFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

impl From<walkdir::Error> for TmBundleError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        bundles_dir_read_failed(path, err.to_string())
    }
}

impl From<ctrlc::Error> for TmBundleError {
    fn from(err: ctrlc::Error) -> Self {
        TmBundleError::SignalHandlerFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TmBundleError>;
