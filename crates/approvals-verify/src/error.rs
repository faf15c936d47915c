use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    #[error(
        "Approval mismatch: {} differs from {}; move the received file over the approved one to accept it",
        .received.display(),
        .approved.display()
    )]
    Mismatch { received: PathBuf, approved: PathBuf },

    #[error("Cannot name approval files: {0}")]
    Naming(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid approvals config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid scrubber pattern: {0}")]
    Scrubber(#[from] regex::Error),
}

impl ApprovalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApprovalError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, ApprovalError::Mismatch { .. })
    }
}
