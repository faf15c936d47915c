//! Combination approvals: generate, execute, format, verify.

use std::fmt;

use approvals_combinatorics::{generate, Mode, ParameterSpace, SpaceError};
use approvals_harness::{execute, render_document, ArgsAndResultFormatter, Formatter};
use approvals_verify::{verify, ApprovalError, Options};

#[derive(Debug, thiserror::Error)]
pub enum CombinationError {
    #[error("Invalid parameter space: {0}")]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Approval(#[from] ApprovalError),
}

impl CombinationError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, CombinationError::Approval(e) if e.is_mismatch())
    }
}

/// The formatted output of one combination run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationRun {
    pub document: String,
    /// Combinations actually executed.
    pub executed: usize,
    /// Size of the full Cartesian product.
    pub total: usize,
}

/// Size of the full Cartesian product of `domains`.
pub fn calculate_total_size<V>(domains: &[Vec<V>]) -> Result<usize, SpaceError> {
    ParameterSpace::new(domains)?.total()
}

/// Execute `f` over the combinations chosen by `mode` and render the document.
///
/// The space is validated before anything runs, so an empty domain never
/// produces a partial document.
pub fn print_combinations<V, R, E, F>(
    f: &F,
    domains: &[Vec<V>],
    formatter: &dyn Formatter<V, R>,
    mode: Mode,
) -> Result<CombinationRun, SpaceError>
where
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    let space = ParameterSpace::new(domains)?;
    let total = space.total()?;
    let combinations = generate(&space, mode);
    tracing::debug!(?mode, executed = combinations.len(), total, "generated combinations");

    let records = execute(f, &space, &combinations);
    Ok(CombinationRun {
        document: render_document(&records, formatter),
        executed: combinations.len(),
        total,
    })
}

/// Verify `f` over every combination of `domains` with the default formatter.
///
/// For `f(product, quantity)` over `[["water", "cola"], [1, 4]]` the calls are
/// `f("water", 1)`, `f("water", 4)`, `f("cola", 1)`, `f("cola", 4)`, one line each.
pub fn verify_all_combinations<V, R, E, F>(
    f: F,
    domains: &[Vec<V>],
    options: &Options,
) -> Result<(), CombinationError>
where
    V: fmt::Debug,
    R: fmt::Debug,
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    verify_all_combinations_with(f, domains, &ArgsAndResultFormatter, options)
}

pub fn verify_all_combinations_with<V, R, E, F>(
    f: F,
    domains: &[Vec<V>],
    formatter: &dyn Formatter<V, R>,
    options: &Options,
) -> Result<(), CombinationError>
where
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    let run = print_combinations(&f, domains, formatter, Mode::Full)?;
    verify(&run.document, options)?;
    Ok(())
}

/// Verify `f` over a pairwise covering subset of `domains`.
///
/// The document starts with `Testing an optimized K/Total scenarios:` so the
/// reduction is visible in the approved file.
pub fn verify_best_covering_pairs<V, R, E, F>(
    f: F,
    domains: &[Vec<V>],
    options: &Options,
) -> Result<(), CombinationError>
where
    V: fmt::Debug,
    R: fmt::Debug,
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    verify_best_covering_pairs_with(f, domains, &ArgsAndResultFormatter, options)
}

pub fn verify_best_covering_pairs_with<V, R, E, F>(
    f: F,
    domains: &[Vec<V>],
    formatter: &dyn Formatter<V, R>,
    options: &Options,
) -> Result<(), CombinationError>
where
    F: Fn(&[&V]) -> Result<R, E>,
    E: fmt::Display,
{
    let run = print_combinations(&f, domains, formatter, Mode::Pairwise)?;
    let document = format!(
        "Testing an optimized {}/{} scenarios:\n\n{}",
        run.executed, run.total, run.document
    );
    verify(&document, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn sum(args: &[&i64]) -> Result<i64, Infallible> {
        Ok(args.iter().copied().sum())
    }

    #[test]
    fn test_total_size() {
        assert_eq!(
            calculate_total_size(&[vec![1, 2], vec![3, 4, 5]]).unwrap(),
            6
        );
    }

    #[test]
    fn test_print_full_mode() {
        let run = print_combinations(
            &sum,
            &[vec![1, 2], vec![10, 20]],
            &ArgsAndResultFormatter,
            Mode::Full,
        )
        .unwrap();
        assert_eq!(run.executed, 4);
        assert_eq!(run.total, 4);
        assert_eq!(
            run.document,
            "args: (1, 10) => 11\nargs: (1, 20) => 21\nargs: (2, 10) => 12\nargs: (2, 20) => 22\n"
        );
    }

    #[test]
    fn test_print_pairwise_reduces() {
        let domains = vec![vec![0i64, 1], vec![0, 1], vec![0, 1]];
        let run =
            print_combinations(&sum, &domains, &ArgsAndResultFormatter, Mode::Pairwise).unwrap();
        assert_eq!(run.executed, 4);
        assert_eq!(run.total, 8);
        assert_eq!(run.document.lines().count(), 4);
    }
}
