//! Update command implementation

use crate::bundle::BundleRepository;
use crate::cancel::CancelToken;
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::operations::update::{UpdateReport, update_bundles};
use crate::paths;
use crate::process::SystemRunner;

use super::{EXIT_INTERRUPTED, EXIT_OK};

/// Run update command
pub fn run(args: UpdateArgs) -> Result<i32> {
    let cancel = CancelToken::from_ctrl_c()?;
    let repository = BundleRepository::new(paths::bundles_dir()?);

    let report = update_bundles(repository.list()?, args.limit, &SystemRunner, &cancel);
    Ok(finish(&report))
}

/// Print the summary and pick the exit code
fn finish(report: &UpdateReport) -> i32 {
    print!("{}", report.summary());
    exit_code(report)
}

fn exit_code(report: &UpdateReport) -> i32 {
    if report.interrupted {
        EXIT_INTERRUPTED
    } else {
        EXIT_OK
    }
}
