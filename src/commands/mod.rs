//! Command implementations for tmbundle CLI
//!
//! Each command returns the exit code the process should terminate with.

pub mod completions;
pub mod edit;
pub mod install;
pub mod list;
pub mod update;
pub mod version;

/// Exit code of a command run to completion
pub const EXIT_OK: i32 = 0;

/// Exit code after an interrupt (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;
