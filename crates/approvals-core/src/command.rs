//! Approvals for executable commands: a query or script whose text and
//! result are verified together.

use std::fmt;

use approvals_harness::Outcome;
use approvals_verify::{verify, ApprovalError, Options};

/// Something that produces a command and knows how to run it.
///
/// Loaders backed by a database or a shell implement this; the engine only
/// consumes the strings they return.
pub trait ExecutableCommand {
    type Error: fmt::Display;

    fn command(&self) -> String;

    fn execute(&self, command: &str) -> Result<String, Self::Error>;
}

/// Render the command and its result (or captured failure) as one document.
pub fn render_executable_command<C: ExecutableCommand + ?Sized>(command: &C) -> String {
    let text = command.command();
    let result = match Outcome::from(command.execute(&text)) {
        Outcome::Value(output) => output,
        Outcome::Failure(failure) => format!("{failure:?}"),
    };
    format!("command:\n{text}\n\nresult:\n{result}\n")
}

pub fn verify_executable_command<C: ExecutableCommand + ?Sized>(
    command: &C,
    options: &Options,
) -> Result<(), ApprovalError> {
    verify(&render_executable_command(command), options)
}
