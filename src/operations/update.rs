//! Update operation
//!
//! Pulls installed bundles one after another with `git pull --ff-only`,
//! sorting each into skipped, updated or errored. An interrupt is honoured
//! between bundles; bundles not reached by then are left out of the report.

use tracing::{debug, warn};

use crate::bundle::Bundle;
use crate::cancel::CancelToken;
use crate::process::{ProcessRunner, git};

/// Bundles processed per update run unless `--limit` says otherwise
pub const DEFAULT_LIMIT: usize = 5;

/// Terminal state of one bundle in an update run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not a git checkout
    Skipped,
    /// `git pull --ff-only` succeeded
    Updated,
    /// `git pull --ff-only` failed or could not be started
    Errored,
}

/// Bundle names per bucket, in processing order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub skipped: Vec<String>,
    pub updated: Vec<String>,
    pub errored: Vec<String>,
    /// The run stopped early on an interrupt request
    pub interrupted: bool,
}

impl UpdateReport {
    fn record(&mut self, bundle: &Bundle, classification: Classification) {
        let bucket = match classification {
            Classification::Skipped => &mut self.skipped,
            Classification::Updated => &mut self.updated,
            Classification::Errored => &mut self.errored,
        };
        bucket.push(bundle.name().to_string());
    }

    /// Summary printed after the run; empty buckets are left out
    pub fn summary(&self) -> String {
        let mut out = String::from("\n\n------> Summary\n\n");
        for (title, names) in [
            ("Skipped", &self.skipped),
            ("Updated", &self.updated),
            ("Errored", &self.errored),
        ] {
            if names.is_empty() {
                continue;
            }
            out.push_str(&format!("{title} ({})\n", names.len()));
            for name in names {
                out.push_str(&format!("- {name}\n"));
            }
            out.push('\n');
        }
        out
    }
}

/// Update the first `limit` bundles in order
pub fn update_bundles(
    bundles: &[Bundle],
    limit: usize,
    runner: &dyn ProcessRunner,
    cancel: &CancelToken,
) -> UpdateReport {
    let mut report = UpdateReport::default();
    if bundles.len() > limit {
        debug!(
            "Updating {} of {} installed bundles",
            limit,
            bundles.len()
        );
    }

    for bundle in bundles.iter().take(limit) {
        let classification = update_bundle(bundle, runner);
        debug!("{} -> {:?}", bundle.name(), classification);
        report.record(bundle, classification);

        if cancel.is_cancelled() {
            println!("Exiting…");
            report.interrupted = true;
            break;
        }
    }

    report
}

fn update_bundle(bundle: &Bundle, runner: &dyn ProcessRunner) -> Classification {
    if !bundle.is_git_checkout() {
        println!(
            "------> Skipping {} (not a Git repo, delta bundle?)",
            bundle.name()
        );
        return Classification::Skipped;
    }

    println!("------> Updating {}...", bundle.name());
    let classification = match runner.run(&git::pull_ff_only(bundle.path())) {
        Ok(status) if status.success() => Classification::Updated,
        Ok(status) => {
            debug!("git pull in {} exited with {:?}", bundle.path().display(), status.code);
            Classification::Errored
        }
        Err(e) => {
            warn!("{}", e);
            Classification::Errored
        }
    };
    println!();
    classification
}
