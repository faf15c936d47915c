use std::cell::Cell;
use std::convert::Infallible;
use std::fs;

use approvals_core::reporters::{QuietReporter, RecordingReporter};
use approvals_core::{
    markdown_table, verify_all_combinations, verify_all_combinations_with,
    verify_best_covering_pairs, verify_executable_command, ApprovalConfig, ApprovalError,
    CombinationError, ExecutableCommand, Options, Outcome, SpaceError, TestNamer, Value,
};

#[derive(Debug, thiserror::Error)]
#[error("three is not allowed")]
struct ThreeNotAllowed;

fn price(args: &[&Value]) -> Result<i64, String> {
    let unit = match args[0].as_str() {
        Some("water") => 1,
        Some("cola") => 2,
        other => return Err(format!("unknown product {other:?}")),
    };
    let quantity = args[1].as_i64().ok_or("quantity must be an integer")?;
    Ok(unit * quantity)
}

fn double_unless_three(args: &[&i64]) -> Result<i64, ThreeNotAllowed> {
    if *args[0] == 3 {
        return Err(ThreeNotAllowed);
    }
    Ok(args[0] * 2)
}

fn count_true(args: &[&bool]) -> Result<usize, Infallible> {
    Ok(args.iter().filter(|b| ***b).count())
}

#[test]
fn test_all_combinations_pricing() {
    let domains = vec![
        vec![Value::from("water"), Value::from("cola")],
        vec![Value::from(1), Value::from(4)],
    ];
    verify_all_combinations(price, &domains, &Options::new()).unwrap();
}

#[test]
fn test_all_combinations_capture_failures() {
    verify_all_combinations(double_unless_three, &[vec![1, 2, 3]], &Options::new()).unwrap();
}

#[test]
fn test_best_covering_pairs_of_flags() {
    let flags = vec![false, true];
    let domains = vec![flags.clone(), flags.clone(), flags];
    verify_best_covering_pairs(count_true, &domains, &Options::new()).unwrap();
}

#[test]
fn test_custom_formatter() {
    let formatter = |args: &[&i64], outcome: &Outcome<i64>| match outcome {
        Outcome::Value(v) => format!("{} doubled is {v}\n", args[0]),
        Outcome::Failure(f) => format!("{} failed: {}\n", args[0], f.message),
    };
    verify_all_combinations_with(
        double_unless_three,
        &[vec![2, 3]],
        &formatter,
        &Options::new(),
    )
    .unwrap();
}

#[test]
fn test_mismatch_writes_received_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pricing.approved.txt"), "stale\n").unwrap();
    let reporter = RecordingReporter::new();
    let options = Options::new()
        .with_config(ApprovalConfig::default())
        .with_reporter(reporter.clone())
        .with_namer(TestNamer::new(dir.path(), "pricing"));

    let err = verify_all_combinations(double_unless_three, &[vec![1, 3]], &options).unwrap_err();

    assert!(err.is_mismatch());
    assert_eq!(reporter.call_count(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("pricing.received.txt")).unwrap(),
        "args: (1,) => 2\nargs: (3,) => ThreeNotAllowed(\"three is not allowed\")\n"
    );
}

#[test]
fn test_empty_domain_fails_before_execution() {
    let calls = Cell::new(0);
    let counting = |args: &[&i64]| -> Result<i64, Infallible> {
        calls.set(calls.get() + 1);
        Ok(*args[0])
    };
    let options = Options::new().with_reporter(QuietReporter);

    let err = verify_all_combinations(counting, &[vec![1], vec![]], &options).unwrap_err();

    assert!(matches!(
        err,
        CombinationError::Space(SpaceError::EmptyDomain { index: 1 })
    ));
    assert_eq!(calls.get(), 0);
}

struct CountryLoader {
    rows: Vec<Vec<Value>>,
}

impl ExecutableCommand for CountryLoader {
    type Error = Infallible;

    fn command(&self) -> String {
        "SELECT c.* FROM Country c".to_string()
    }

    fn execute(&self, _command: &str) -> Result<String, Infallible> {
        Ok(markdown_table(&["country_id", "country"], &self.rows))
    }
}

#[test]
fn test_executable_command_with_table() {
    let loader = CountryLoader {
        rows: vec![
            vec![Value::from(1), Value::from("Afghanistan")],
            vec![Value::from(2), Value::from("Algeria")],
        ],
    };
    verify_executable_command(&loader, &Options::new()).unwrap();
}

#[test]
fn test_executable_command_mismatch_is_approval_error() {
    let dir = tempfile::tempdir().unwrap();
    let loader = CountryLoader { rows: vec![] };
    let options = Options::new()
        .with_config(ApprovalConfig::default())
        .with_reporter(QuietReporter)
        .with_namer(TestNamer::new(dir.path(), "countries"));

    let err = verify_executable_command(&loader, &options).unwrap_err();
    assert!(matches!(err, ApprovalError::Mismatch { .. }));
}
