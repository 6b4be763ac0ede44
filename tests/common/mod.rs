//! Common test utilities for tmbundle integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Bundles directory below the fake home
pub const BUNDLES_SUBDIR: &str = "Library/Application Support/Avian/Bundles";

/// A fake home directory with a bundles directory and fake tools on PATH
#[allow(dead_code)]
pub struct TestHome {
    /// Temporary directory
    pub temp: TempDir,
    /// Path used as `$HOME`
    pub home: PathBuf,
    /// Directory holding fake `git` and `mate` executables
    pub bin: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    /// Create a fake home with an empty bundles directory
    pub fn new() -> Self {
        let home = Self::without_bundles_dir();
        std::fs::create_dir_all(home.bundles_dir()).expect("Failed to create bundles directory");
        home
    }

    /// Create a fake home without a bundles directory
    pub fn without_bundles_dir() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, home, bin }
    }

    pub fn bundles_dir(&self) -> PathBuf {
        self.home.join(BUNDLES_SUBDIR)
    }

    /// Create `<name>.tmbundle`, as a git checkout when `git` is true
    pub fn create_bundle(&self, name: &str, git: bool) -> PathBuf {
        let path = self.bundles_dir().join(format!("{name}.tmbundle"));
        std::fs::create_dir_all(&path).expect("Failed to create bundle directory");
        if git {
            std::fs::create_dir_all(path.join(".git")).expect("Failed to create .git");
        }
        path
    }

    /// Make `git pull` fail inside the bundle
    pub fn fail_pull(&self, bundle: &Path) {
        std::fs::write(bundle.join(".fail-pull"), "").expect("Failed to write marker");
    }

    /// Log file the fake tools append their invocations to
    pub fn log_path(&self) -> PathBuf {
        self.temp.path().join("calls.log")
    }

    /// Invocations recorded by the fake tools, one per line
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Install a fake executable `name` running `body` with `sh`
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake tool");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod fake tool");
    }

    /// Fake `git`: logs `git <args> @ <cwd>`, fails pulls where `.fail-pull` exists
    /// and clones with `FAKE_CLONE_STATUS`
    #[cfg(unix)]
    pub fn fake_git(&self) {
        self.fake_tool(
            "git",
            r#"echo "git $* @ $(pwd)" >> "$TMBUNDLE_TEST_LOG"
if [ "$1" = "pull" ] && [ -e .fail-pull ]; then exit 1; fi
if [ "$1" = "clone" ]; then exit "${FAKE_CLONE_STATUS:-0}"; fi
exit 0"#,
        );
    }

    /// Fake `mate`: logs its arguments and exits with `FAKE_MATE_STATUS`
    #[cfg(unix)]
    pub fn fake_mate(&self) {
        self.fake_tool(
            "mate",
            r#"echo "mate $*" >> "$TMBUNDLE_TEST_LOG"
exit "${FAKE_MATE_STATUS:-0}""#,
        );
    }

    /// The real tmbundle binary with `$HOME` and `$PATH` pointing here
    pub fn cmd(&self) -> Command {
        let mut cmd = tmbundle_cmd();
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin.clone()];
        paths.extend(std::env::split_paths(&path));
        cmd.env("HOME", &self.home)
            .env("PATH", std::env::join_paths(paths).expect("Invalid PATH"))
            .env("TMBUNDLE_TEST_LOG", self.log_path())
            .env_remove("TMBUNDLE_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn tmbundle_cmd() -> Command {
    Command::cargo_bin("tmbundle").expect("tmbundle binary not built")
}
