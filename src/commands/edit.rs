//! Edit command implementation

use console::Style;

use crate::bundle::BundleRepository;
use crate::cli::EditArgs;
use crate::error::Result;
use crate::operations::edit::{EditOutcome, edit};
use crate::paths;
use crate::process::SystemRunner;

use super::EXIT_OK;

/// Run edit command
pub fn run(args: EditArgs) -> Result<i32> {
    let repository = BundleRepository::new(paths::bundles_dir()?);
    let outcome = edit(&repository, &args.partial_name, &SystemRunner)?;
    Ok(report(&outcome))
}

/// Print the outcome and pick the exit code
fn report(outcome: &EditOutcome) -> i32 {
    match outcome {
        EditOutcome::NotFound => {
            println!("nothing found");
            EXIT_OK
        }
        EditOutcome::Ambiguous(names) => {
            println!("please be more specific:");
            for (i, name) in names.iter().enumerate() {
                println!(" {}) {}", i + 1, Style::new().yellow().apply_to(name));
            }
            EXIT_OK
        }
        EditOutcome::Opened(status) => status.code.unwrap_or(1),
    }
}
