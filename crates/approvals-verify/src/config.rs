//! On-disk approval settings, read from `approvals_config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ApprovalError;

pub const CONFIG_FILE_NAME: &str = "approvals_config.json";

/// Environment variable naming a built-in reporter; wins over the config file.
pub const REPORTER_ENV: &str = "APPROVALS_REPORTER";

/// Settings shared by every approval test under one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// Where approved and received files live, relative to the test directory.
    pub subdirectory: Option<String>,
    /// Built-in reporter name (`quiet`, `print`, `diff`, `gitdiff`).
    pub reporter: Option<String>,
    /// Unify `\r\n` and `\r` to `\n` on both sides before comparing.
    pub normalize_line_endings: bool,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            subdirectory: None,
            reporter: None,
            normalize_line_endings: true,
        }
    }
}

impl ApprovalConfig {
    pub fn parse(json: &str, path: &Path) -> Result<Self, ApprovalError> {
        serde_json::from_str(json).map_err(|source| ApprovalError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `approvals_config.json` from `directory`; a missing file means defaults.
    pub fn load(directory: &Path) -> Result<Self, ApprovalError> {
        let path = directory.join(CONFIG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse(&json, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ApprovalError::io(path, e)),
        }
    }

    /// Config for the crate under test: `$CARGO_MANIFEST_DIR/tests`, or defaults
    /// outside cargo.
    pub fn discover() -> Result<Self, ApprovalError> {
        match test_directory() {
            Some(dir) => Self::load(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Reporter name from the environment, falling back to the config file.
    pub fn reporter_name(&self) -> Option<String> {
        std::env::var(REPORTER_ENV)
            .ok()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.reporter.clone())
    }

    /// Directory holding approval files for tests rooted at `test_dir`.
    pub fn approvals_directory(&self, test_dir: &Path) -> PathBuf {
        match &self.subdirectory {
            Some(sub) => test_dir.join(sub),
            None => test_dir.to_path_buf(),
        }
    }
}

/// `$CARGO_MANIFEST_DIR/tests`, when running under cargo.
pub fn test_directory() -> Option<PathBuf> {
    std::env::var_os("CARGO_MANIFEST_DIR").map(|dir| PathBuf::from(dir).join("tests"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let config = ApprovalConfig::parse(r#"{"subdirectory": "approved_files"}"#, Path::new("x"))
            .unwrap();
        assert_eq!(config.subdirectory.as_deref(), Some("approved_files"));
        assert!(config.normalize_line_endings);
        assert_eq!(config.reporter, None);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = ApprovalConfig::parse("{not json", Path::new("cfg.json")).unwrap_err();
        assert!(matches!(err, ApprovalError::Config { .. }));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            ApprovalConfig::load(dir.path()).unwrap(),
            ApprovalConfig::default()
        );
    }

    #[test]
    fn test_approvals_directory() {
        let config = ApprovalConfig {
            subdirectory: Some("approved".into()),
            ..ApprovalConfig::default()
        };
        assert_eq!(
            config.approvals_directory(Path::new("/t")),
            PathBuf::from("/t/approved")
        );
    }
}
