//! In-process textual diff printed to stderr.

use std::io::Write;
use std::path::Path;

use difference::{Changeset, Difference};

use super::Reporter;

/// Prints a line diff (approved `-`, received `+`) followed by the command
/// that would accept the received file.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffPrintReporter;

impl DiffPrintReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for DiffPrintReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        let received_text = match std::fs::read_to_string(received) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %received.display(), error = %e, "cannot read received file");
                return false;
            }
        };
        let approved_text = std::fs::read_to_string(approved).unwrap_or_default();

        let mut out = render_diff(&approved_text, &received_text);
        out.push_str(&approve_command(received, approved));
        out.push('\n');

        std::io::stderr().write_all(out.as_bytes()).is_ok()
    }
}

/// Render the line diff between two documents.
pub fn render_diff(approved: &str, received: &str) -> String {
    let changeset = Changeset::new(approved, received, "\n");
    let mut out = String::new();
    for diff in &changeset.diffs {
        let (prefix, chunk) = match diff {
            Difference::Same(chunk) => (' ', chunk),
            Difference::Rem(chunk) => ('-', chunk),
            Difference::Add(chunk) => ('+', chunk),
        };
        for line in chunk.split('\n') {
            out.push(prefix);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Shell command that promotes the received file to approved.
pub fn approve_command(received: &Path, approved: &Path) -> String {
    let mv = if cfg!(windows) { "move /Y" } else { "mv" };
    format!(
        "To approve run:\n{mv} \"{}\" \"{}\"",
        received.display(),
        approved.display()
    )
}
