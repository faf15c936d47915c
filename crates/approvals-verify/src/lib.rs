//! Approve/verify protocol: compare a freshly produced document against an
//! approved baseline on disk and report any divergence.

pub mod config;
pub mod error;
pub mod namer;
pub mod options;
pub mod reporters;
pub mod scrub;
pub mod verify;

pub use config::ApprovalConfig;
pub use error::ApprovalError;
pub use namer::{Namer, TestNamer};
pub use options::Options;
pub use reporters::Reporter;
pub use verify::{verify, verify_with_namer, ApprovalPaths};
