//! Reporter that launches an external diff program.
//!
//! The tool is invoked as `<path> <extra_args...> <received> <approved>`.
//! With `wait` set the reporter blocks until the tool exits (right for
//! terminal tools like `diff`); otherwise the process is spawned and left
//! running (right for GUI tools) and is never waited on, so its exit status
//! is not observed. A tool that cannot be found or started is logged and
//! reported as `false`.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::Reporter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericDiffReporterConfig {
    /// Display name used in logs.
    pub name: String,
    /// Executable: a bare name is looked up on `PATH`.
    pub path: PathBuf,
    #[serde(default)]
    pub extra_args: Vec<String>,
    /// Block until the tool exits.
    #[serde(default)]
    pub wait: bool,
}

impl GenericDiffReporterConfig {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            extra_args: Vec::new(),
            wait: false,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn waiting(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GenericDiffReporter {
    config: GenericDiffReporterConfig,
}

impl GenericDiffReporter {
    pub fn new(config: GenericDiffReporterConfig) -> Self {
        Self { config }
    }

    /// `diff -u -N`: unified diff, a missing approved file reads as empty. Waits.
    pub fn diff() -> Self {
        Self::new(
            GenericDiffReporterConfig::new("diff", "diff")
                .with_args(["-u", "-N"])
                .waiting(true),
        )
    }

    /// `git diff --no-index --color`. Waits.
    pub fn git_diff() -> Self {
        Self::new(
            GenericDiffReporterConfig::new("gitdiff", "git")
                .with_args(["diff", "--no-index", "--color"])
                .waiting(true),
        )
    }

    pub fn config(&self) -> &GenericDiffReporterConfig {
        &self.config
    }

    /// A path with directory components must exist; bare names are resolved at launch.
    pub fn is_working(&self) -> bool {
        let path = &self.config.path;
        path.components().count() <= 1 || path.exists()
    }

    pub fn command(&self, received: &Path, approved: &Path) -> Command {
        let mut command = Command::new(&self.config.path);
        command
            .args(&self.config.extra_args)
            .arg(received)
            .arg(approved);
        command
    }
}

impl Reporter for GenericDiffReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        let name = &self.config.name;
        if !self.is_working() {
            tracing::debug!(tool = %name, path = %self.config.path.display(), "diff tool not found");
            return false;
        }

        let mut command = self.command(received, approved);
        let launched = if self.config.wait {
            command.status().map(|status| {
                tracing::debug!(tool = %name, ?status, "diff tool exited");
            })
        } else {
            command.spawn().map(|child| {
                tracing::debug!(tool = %name, pid = child.id(), "diff tool launched");
            })
        };

        match launched {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "failed to launch diff tool");
                false
            }
        }
    }
}
