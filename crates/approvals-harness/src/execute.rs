//! Execution of the function under test over generated combinations.
//!
//! Errors and panics raised by one combination are captured into its
//! record; execution always continues with the next combination. Records
//! come back in the order the combinations were given.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use approvals_combinatorics::{Combination, ParameterSpace};

use crate::outcome::{Failure, Outcome};

/// The arguments of one invocation paired with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRecord<'a, V, R> {
    pub args: Vec<&'a V>,
    pub outcome: Outcome<R>,
}

/// Invoke `f` once, converting `Err` returns and panics into `Outcome::Failure`.
pub fn invoke<V, R, E, F>(f: &F, args: &[&V]) -> Outcome<R>
where
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    match catch_unwind(AssertUnwindSafe(|| f(args))) {
        Ok(Ok(value)) => Outcome::Value(value),
        Ok(Err(error)) => Outcome::Failure(Failure::from_error(&error)),
        Err(payload) => Outcome::Failure(Failure::from_panic(payload)),
    }
}

/// Run `f` against every combination, in order.
pub fn execute<'a, V, R, E, F>(
    f: &F,
    space: &ParameterSpace<'a, V>,
    combinations: &[Combination],
) -> Vec<ExecutionRecord<'a, V, R>>
where
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    let records: Vec<_> = combinations
        .iter()
        .map(|combination| {
            let args = space.resolve(combination);
            let outcome = invoke(f, &args);
            if let Outcome::Failure(failure) = &outcome {
                tracing::debug!(
                    combination = ?combination.indices,
                    kind = %failure.kind,
                    "captured failure from function under test"
                );
            }
            ExecutionRecord { args, outcome }
        })
        .collect();

    let failures = records.iter().filter(|r| r.outcome.is_failure()).count();
    tracing::debug!(records = records.len(), failures, "executed combinations");

    records
}
