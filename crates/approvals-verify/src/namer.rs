//! Naming context: where a test's approved and received files live.

use std::path::{Path, PathBuf};

use crate::config::{test_directory, ApprovalConfig};
use crate::error::ApprovalError;

/// Supplies the directory and file stem shared by a test's approval artifacts.
///
/// The approved file is `<base>.approved.<ext>` and the received file is
/// `<base>.received.<ext>`.
pub trait Namer {
    fn base(&self) -> Result<PathBuf, ApprovalError>;

    fn approved_file(&self, extension: &str) -> Result<PathBuf, ApprovalError> {
        Ok(with_suffix(self.base()?, "approved", extension))
    }

    fn received_file(&self, extension: &str) -> Result<PathBuf, ApprovalError> {
        Ok(with_suffix(self.base()?, "received", extension))
    }
}

impl<N: Namer + ?Sized> Namer for &N {
    fn base(&self) -> Result<PathBuf, ApprovalError> {
        (**self).base()
    }
}

impl<N: Namer + ?Sized> Namer for Box<N> {
    fn base(&self) -> Result<PathBuf, ApprovalError> {
        (**self).base()
    }
}

/// Names files after a test's identity, e.g. `combos::tests::pricing` in the
/// `combos_tests` test binary becomes `combos_tests.combos.tests.pricing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestNamer {
    directory: PathBuf,
    name: String,
}

impl TestNamer {
    /// An explicit directory and base name.
    pub fn new(directory: impl Into<PathBuf>, test_name: &str) -> Self {
        Self {
            directory: directory.into(),
            name: sanitize(test_name),
        }
    }

    /// Derive the name from the running libtest test, using the
    /// `approvals_config.json` found in the crate's `tests` directory.
    pub fn from_current_test() -> Result<Self, ApprovalError> {
        let test_dir = current_test_directory()?;
        let config = ApprovalConfig::load(&test_dir)?;
        Self::from_current_test_with(&config)
    }

    /// Derive the name from the running libtest test.
    ///
    /// libtest names each test thread after the test's path inside its binary,
    /// so the binary's stem is prefixed to tell `tests/a.rs` and `tests/b.rs`
    /// apart. Files go to `$CARGO_MANIFEST_DIR/tests`, or `config.subdirectory`
    /// under it.
    pub fn from_current_test_with(config: &ApprovalConfig) -> Result<Self, ApprovalError> {
        let thread = std::thread::current();
        let test_name = thread
            .name()
            .filter(|name| *name != "main")
            .ok_or_else(|| {
                ApprovalError::Naming(
                    "no test identity on this thread; run under the test harness or pass a namer"
                        .to_string(),
                )
            })?;
        let test_dir = current_test_directory()?;
        let directory = config.approvals_directory(&test_dir);
        match test_binary_stem() {
            Some(binary) => Ok(Self::new(directory, &format!("{binary}::{test_name}"))),
            None => Ok(Self::new(directory, test_name)),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Namer for TestNamer {
    fn base(&self) -> Result<PathBuf, ApprovalError> {
        if self.name.is_empty() {
            return Err(ApprovalError::Naming("empty test name".to_string()));
        }
        Ok(self.directory.join(&self.name))
    }
}

/// Adds an extra `.<discriminator>` segment to another namer's base, so one
/// test can own several approved files.
#[derive(Debug, Clone)]
pub struct DiscriminatedNamer<N> {
    inner: N,
    discriminator: String,
}

impl<N: Namer> DiscriminatedNamer<N> {
    pub fn new(inner: N, discriminator: &str) -> Self {
        Self {
            inner,
            discriminator: sanitize(discriminator),
        }
    }
}

impl<N: Namer> Namer for DiscriminatedNamer<N> {
    fn base(&self) -> Result<PathBuf, ApprovalError> {
        let base = self.inner.base()?;
        Ok(append_to_file_name(base, &format!(".{}", self.discriminator)))
    }
}

fn current_test_directory() -> Result<PathBuf, ApprovalError> {
    test_directory()
        .ok_or_else(|| ApprovalError::Naming("CARGO_MANIFEST_DIR is not set".to_string()))
}

/// The running test binary's name without cargo's `-<hash>` suffix.
fn test_binary_stem() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let stem = exe.file_stem()?.to_str()?;
    Some(strip_build_hash(stem).to_string())
}

fn strip_build_hash(stem: &str) -> &str {
    match stem.rsplit_once('-') {
        Some((name, hash))
            if !name.is_empty() && !hash.is_empty() && hash.chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            name
        }
        _ => stem,
    }
}

fn with_suffix(base: PathBuf, kind: &str, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    append_to_file_name(base, &format!(".{kind}.{extension}"))
}

fn append_to_file_name(mut path: PathBuf, suffix: &str) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(suffix);
    path.set_file_name(file_name);
    path
}

/// Module separators become dots; anything unsafe in a file name becomes `_`.
fn sanitize(name: &str) -> String {
    name.replace("::", ".")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
