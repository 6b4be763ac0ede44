//! External editor

use std::path::Path;

use super::Invocation;

/// TextMate's command line launcher
pub const EDITOR: &str = "mate";

/// Open `path` in the editor
pub fn open(path: &Path) -> Invocation {
    Invocation::new(EDITOR).arg(path)
}
