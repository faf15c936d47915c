use approvals_combinatorics::{generate, Mode, ParameterSpace};
use approvals_harness::{
    execute, render_document, ArgsAndResultFormatter, Failure, Outcome, Value,
};

#[derive(Debug, thiserror::Error)]
#[error("three is not allowed")]
struct ThreeNotAllowed;

fn double_unless_three(args: &[&i64]) -> Result<i64, ThreeNotAllowed> {
    if *args[0] == 3 {
        return Err(ThreeNotAllowed);
    }
    Ok(args[0] * 2)
}

#[test]
fn test_failure_does_not_stop_execution() {
    let domains = vec![vec![1i64, 2, 3]];
    let space = ParameterSpace::new(&domains).unwrap();
    let combos = generate(&space, Mode::Full);
    let records = execute(&double_unless_three, &space, &combos);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].outcome, Outcome::Value(2));
    assert_eq!(records[1].outcome, Outcome::Value(4));
    assert_eq!(
        records[2].outcome,
        Outcome::Failure(Failure::new("ThreeNotAllowed", "three is not allowed"))
    );

    let document = render_document(&records, &ArgsAndResultFormatter);
    assert_eq!(
        document,
        "args: (1,) => 2\n\
         args: (2,) => 4\n\
         args: (3,) => ThreeNotAllowed(\"three is not allowed\")\n"
    );
}

#[test]
fn test_heterogeneous_values_from_json() {
    let domains: Vec<Vec<Value>> =
        serde_json::from_str(r#"[["water", "cola"], [1, 4]]"#).unwrap();
    let space = ParameterSpace::new(&domains).unwrap();
    let combos = generate(&space, Mode::Full);

    let price = |args: &[&Value]| -> Result<String, ThreeNotAllowed> {
        let product = args[0].as_str().unwrap_or_default();
        let quantity = args[1].as_i64().unwrap_or_default();
        Ok(format!("{quantity} x {product}"))
    };
    let records = execute(&price, &space, &combos);
    let document = render_document(&records, &ArgsAndResultFormatter);

    assert_eq!(
        document,
        "args: (\"water\", 1) => \"1 x water\"\n\
         args: (\"water\", 4) => \"4 x water\"\n\
         args: (\"cola\", 1) => \"1 x cola\"\n\
         args: (\"cola\", 4) => \"4 x cola\"\n"
    );
}

#[test]
fn test_custom_formatter_keeps_record_order() {
    let domains = vec![vec![5i64, 1, 3]];
    let space = ParameterSpace::new(&domains).unwrap();
    let combos = generate(&space, Mode::Full);
    let records = execute(&double_unless_three, &space, &combos);

    let terse = |args: &[&i64], outcome: &Outcome<i64>| match outcome {
        Outcome::Value(v) => format!("{}={v};", args[0]),
        Outcome::Failure(f) => format!("{}!{};", args[0], f.kind),
    };
    assert_eq!(
        render_document(&records, &terse),
        "5=10;1=2;3!ThreeNotAllowed;"
    );
}
