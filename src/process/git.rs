//! Git command lines used by update and install

use std::path::Path;

use super::Invocation;

/// Program name of the git client
pub const GIT: &str = "git";

/// `git pull --ff-only` inside `bundle_dir`
pub fn pull_ff_only(bundle_dir: &Path) -> Invocation {
    Invocation::new(GIT)
        .arg("pull")
        .arg("--ff-only")
        .current_dir(bundle_dir)
}

/// `git clone <url> <target>`
pub fn clone(url: &str, target: &Path) -> Invocation {
    Invocation::new(GIT).arg("clone").arg(url).arg(target)
}
