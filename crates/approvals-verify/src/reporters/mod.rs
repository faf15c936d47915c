//! Strategies for presenting an approval mismatch to a human.
//!
//! A reporter is only invoked after the received file has been written. Its
//! return value says whether it managed to present the difference, never
//! whether the files match. Reporters must not panic or propagate errors when
//! an external tool is missing; they log and return `false`.

pub mod chain;
pub mod generic;
pub mod print;
pub mod testing;

use std::path::Path;

pub use chain::{FirstWorkingReporter, MultiReporter};
pub use generic::{GenericDiffReporter, GenericDiffReporterConfig};
pub use print::DiffPrintReporter;
pub use testing::{QuietReporter, RecordingReporter, ReportCall};

use crate::config::ApprovalConfig;

pub trait Reporter {
    fn report(&self, received: &Path, approved: &Path) -> bool;
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        (**self).report(received, approved)
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        (**self).report(received, approved)
    }
}

/// Look up a built-in reporter by name.
pub fn reporter_from_name(name: &str) -> Option<Box<dyn Reporter>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "quiet" | "none" => Some(Box::new(QuietReporter)),
        "print" => Some(Box::new(DiffPrintReporter::new())),
        "diff" => Some(Box::new(GenericDiffReporter::diff())),
        "gitdiff" | "git-diff" => Some(Box::new(GenericDiffReporter::git_diff())),
        _ => None,
    }
}

/// The reporter used when options name none: `APPROVALS_REPORTER`, then the
/// config file, then printing the diff to stderr.
pub fn default_reporter(config: &ApprovalConfig) -> Box<dyn Reporter> {
    if let Some(name) = config.reporter_name() {
        if let Some(reporter) = reporter_from_name(&name) {
            return reporter;
        }
        tracing::warn!(reporter = %name, "unknown reporter name, falling back to diff printing");
    }
    Box::new(DiffPrintReporter::new())
}
