//! Reporters for automated environments.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::Reporter;

/// Does nothing. Use in CI where no one is watching.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn report(&self, _received: &Path, _approved: &Path) -> bool {
        false
    }
}

/// One recorded `report` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCall {
    pub received: PathBuf,
    pub approved: PathBuf,
}

/// Registers every call instead of presenting anything.
///
/// Clones share the same log, so a test can hand one clone to `Options` and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    calls: Arc<Mutex<Vec<ReportCall>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ReportCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReportCall {
                received: received.to_path_buf(),
                approved: approved.to_path_buf(),
            });
        true
    }
}
