//! Version command implementation

use crate::error::Result;

use super::EXIT_OK;

/// Run version command
pub fn run() -> Result<i32> {
    println!("tmbundle {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(EXIT_OK)
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
