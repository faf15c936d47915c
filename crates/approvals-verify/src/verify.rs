//! The approve/verify protocol.
//!
//! A verification either matches (any stale received file is removed) or
//! mismatches (the received file is written, the reporter is invoked once and
//! `ApprovalError::Mismatch` is returned). Approved files are only ever read.
//!
//! There is no locking: two concurrent runs that resolve to the same names
//! race on the received file. Give concurrently running tests distinct names.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ApprovalConfig;
use crate::error::ApprovalError;
use crate::namer::{DiscriminatedNamer, Namer, TestNamer};
use crate::options::Options;
use crate::reporters::{default_reporter, Reporter};
use crate::scrub::normalize_line_endings;

/// Resolved approved/received file locations for one verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalPaths {
    pub approved: PathBuf,
    pub received: PathBuf,
}

impl ApprovalPaths {
    pub fn resolve(namer: &dyn Namer, options: &Options) -> Result<Self, ApprovalError> {
        let extension = options.extension();
        match options.discriminator() {
            Some(discriminator) => {
                let namer = DiscriminatedNamer::new(namer, discriminator);
                Ok(Self {
                    approved: namer.approved_file(extension)?,
                    received: namer.received_file(extension)?,
                })
            }
            None => Ok(Self {
                approved: namer.approved_file(extension)?,
                received: namer.received_file(extension)?,
            }),
        }
    }
}

/// Verify `document` against the approved file of the running test, or of
/// the namer set in `options`.
pub fn verify(document: &str, options: &Options) -> Result<(), ApprovalError> {
    match options.namer() {
        Some(namer) => verify_with_namer(document, namer, options),
        None => {
            let config = options.config()?;
            let namer = TestNamer::from_current_test_with(&config)?;
            verify_with_namer(document, &namer, options)
        }
    }
}

pub fn verify_with_namer(
    document: &str,
    namer: &dyn Namer,
    options: &Options,
) -> Result<(), ApprovalError> {
    let config = options.config()?;
    let paths = ApprovalPaths::resolve(namer, options)?;

    let received = prepare(&options.scrub(document), &config);
    let approved = prepare(&read_approved(&paths.approved)?, &config);

    if received == approved {
        remove_stale(&paths.received)?;
        tracing::debug!(approved = %paths.approved.display(), "approval matched");
        return Ok(());
    }

    write_received(&paths.received, &received)?;
    tracing::info!(
        received = %paths.received.display(),
        approved = %paths.approved.display(),
        "approval mismatch"
    );

    let fallback;
    let reporter: &dyn Reporter = match options.reporter() {
        Some(reporter) => reporter,
        None => {
            fallback = default_reporter(&config);
            fallback.as_ref()
        }
    };
    if !reporter.report(&paths.received, &paths.approved) {
        tracing::debug!("reporter did not present the mismatch");
    }

    Err(ApprovalError::Mismatch {
        received: paths.received,
        approved: paths.approved,
    })
}

fn prepare(text: &str, config: &ApprovalConfig) -> String {
    if config.normalize_line_endings {
        normalize_line_endings(text)
    } else {
        text.to_string()
    }
}

/// A missing approved file reads as an empty baseline.
fn read_approved(path: &Path) -> Result<String, ApprovalError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ApprovalError::io(path, e)),
    }
}

fn remove_stale(path: &Path) -> Result<(), ApprovalError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed stale received file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ApprovalError::io(path, e)),
    }
}

/// Write through a temporary file in the same directory and rename it into
/// place, so the received file is either the old one or the complete new one.
fn write_received(path: &Path, text: &str) -> Result<(), ApprovalError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| ApprovalError::io(dir, e))?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| ApprovalError::io(dir, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| ApprovalError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| ApprovalError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote received file");
    Ok(())
}
