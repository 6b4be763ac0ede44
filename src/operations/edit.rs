//! Edit operation
//!
//! Selects an installed bundle by partial name and opens it in the editor.

use regex::RegexBuilder;
use tracing::debug;

use crate::bundle::{Bundle, BundleRepository};
use crate::error::{Result, TmBundleError};
use crate::process::{ProcessRunner, Status, editor};

/// What the edit operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No bundle name starts with the partial name
    NotFound,
    /// Several bundles match; their names in enumeration order
    Ambiguous(Vec<String>),
    /// The editor ran (or replaced this process) with the given status
    Opened(Status),
}

/// Bundles whose name starts with `partial`, ignoring case.
///
/// `partial` is a regular expression anchored at the start of the name.
pub fn find_matches<'a>(bundles: &'a [Bundle], partial: &str) -> Result<Vec<&'a Bundle>> {
    let pattern = RegexBuilder::new(&format!("^(?:{partial})"))
        .case_insensitive(true)
        .build()
        .map_err(|e| TmBundleError::InvalidPattern {
            pattern: partial.to_string(),
            reason: e.to_string(),
        })?;

    Ok(bundles
        .iter()
        .filter(|bundle| pattern.is_match(bundle.name()))
        .collect())
}

/// Open the single bundle matching `partial` in the editor
pub fn edit(
    repository: &BundleRepository,
    partial: &str,
    runner: &dyn ProcessRunner,
) -> Result<EditOutcome> {
    let matches = find_matches(repository.list()?, partial)?;
    debug!("'{}' matched {} bundles", partial, matches.len());

    match matches.as_slice() {
        [] => Ok(EditOutcome::NotFound),
        [bundle] => {
            let status = runner.hand_off(&editor::open(bundle.path()))?;
            Ok(EditOutcome::Opened(status))
        }
        several => Ok(EditOutcome::Ambiguous(
            several.iter().map(|b| b.name().to_string()).collect(),
        )),
    }
}
