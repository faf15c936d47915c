//! Combinatorial approval testing.
//!
//! Run a function against every combination (or a pairwise covering subset)
//! of its candidate arguments, render each call as a line of text, and verify
//! the whole document against an approved file.

pub mod combinations;
pub mod command;
pub mod table;

pub use approvals_combinatorics::{Mode, SpaceError};
pub use approvals_harness::{ArgsAndResultFormatter, Failure, Formatter, Outcome, Value};
pub use approvals_verify::reporters;
pub use approvals_verify::{verify, ApprovalConfig, ApprovalError, Namer, Options, TestNamer};

pub use combinations::{
    calculate_total_size, print_combinations, verify_all_combinations,
    verify_all_combinations_with, verify_best_covering_pairs, verify_best_covering_pairs_with,
    CombinationError, CombinationRun,
};
pub use command::{render_executable_command, verify_executable_command, ExecutableCommand};
pub use table::markdown_table;
