//! Reporters that delegate to other reporters.

use std::path::Path;

use super::Reporter;

/// Tries each reporter in order and stops at the first that presents the diff.
#[derive(Default)]
pub struct FirstWorkingReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl FirstWorkingReporter {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        Self { reporters }
    }

    pub fn then(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }
}

impl Reporter for FirstWorkingReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        self.reporters
            .iter()
            .any(|reporter| reporter.report(received, approved))
    }
}

/// Invokes every reporter; succeeds if any of them did.
#[derive(Default)]
pub struct MultiReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl MultiReporter {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        Self { reporters }
    }

    pub fn and(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }
}

impl Reporter for MultiReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        self.reporters
            .iter()
            .fold(false, |any, reporter| reporter.report(received, approved) || any)
    }
}
