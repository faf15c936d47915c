//! Per-call verification options.

use std::borrow::Cow;

use crate::config::ApprovalConfig;
use crate::error::ApprovalError;
use crate::namer::Namer;
use crate::reporters::Reporter;
use crate::scrub::{apply_all, Scrubber};

pub const DEFAULT_EXTENSION: &str = "txt";

/// What to verify with: reporter, scrubbers, file extension, naming.
///
/// Unset fields fall back to the discovered [`ApprovalConfig`] and the
/// running test's identity.
pub struct Options {
    reporter: Option<Box<dyn Reporter>>,
    scrubbers: Vec<Scrubber>,
    extension: String,
    namer: Option<Box<dyn Namer>>,
    discriminator: Option<String>,
    config: Option<ApprovalConfig>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            reporter: None,
            scrubbers: Vec::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            namer: None,
            discriminator: None,
            config: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Add a scrubber after the ones already configured.
    pub fn with_scrubber(mut self, scrubber: impl Fn(&str) -> String + 'static) -> Self {
        self.scrubbers.push(Box::new(scrubber));
        self
    }

    /// File extension of the approved and received files, with or without the dot.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_namer(mut self, namer: impl Namer + 'static) -> Self {
        self.namer = Some(Box::new(namer));
        self
    }

    /// Extra name segment so one test can verify several documents.
    pub fn with_discriminator(mut self, discriminator: &str) -> Self {
        self.discriminator = Some(discriminator.to_string());
        self
    }

    /// Use this config instead of discovering `approvals_config.json`.
    pub fn with_config(mut self, config: ApprovalConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn namer(&self) -> Option<&dyn Namer> {
        self.namer.as_deref()
    }

    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    pub fn config(&self) -> Result<Cow<'_, ApprovalConfig>, ApprovalError> {
        match &self.config {
            Some(config) => Ok(Cow::Borrowed(config)),
            None => ApprovalConfig::discover().map(Cow::Owned),
        }
    }

    /// Run the configured scrubbers in order.
    pub fn scrub(&self, text: &str) -> String {
        apply_all(&self.scrubbers, text)
    }

    /// The explicitly configured reporter, if any.
    pub fn reporter(&self) -> Option<&dyn Reporter> {
        self.reporter.as_deref()
    }
}
