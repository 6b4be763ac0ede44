//! Subprocess invocation
//!
//! Every external program (git, the editor) is started through a
//! [`ProcessRunner`]. An [`Invocation`] carries its own working directory so
//! the process-wide current directory is never changed.

pub mod editor;
pub mod git;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Result, spawn_failed};

/// A program to run, its arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(ref cwd) = self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

/// Outcome of a finished subprocess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl Status {
    pub const SUCCESS: Status = Status { code: Some(0) };

    #[cfg(test)]
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for Status {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs external programs on behalf of the commands
pub trait ProcessRunner {
    /// Run to completion with inherited stdio
    fn run(&self, invocation: &Invocation) -> Result<Status>;

    /// Hand control to an interactive program and adopt its exit status.
    ///
    /// Runners that cannot replace the current process run the program as a
    /// blocking child instead.
    fn hand_off(&self, invocation: &Invocation) -> Result<Status> {
        self.run(invocation)
    }
}

/// Runner backed by real OS processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<Status> {
        debug!("Running {:?}", invocation);
        let status = invocation
            .to_command()
            .status()
            .map_err(|e| spawn_failed(&invocation.program, e.to_string()))?;
        debug!("{} exited with {:?}", invocation.program, status.code());
        Ok(status.into())
    }

    #[cfg(unix)]
    fn hand_off(&self, invocation: &Invocation) -> Result<Status> {
        use std::os::unix::process::CommandExt;

        debug!("Replacing process with {:?}", invocation);
        // exec only returns on failure
        let err = invocation.to_command().exec();
        Err(spawn_failed(&invocation.program, err.to_string()))
    }
}
