//! Canonical text rendering of execution records.

use std::fmt::{self, Write};

use crate::execute::ExecutionRecord;
use crate::outcome::Outcome;

/// Renders one record into the text written to the approval document.
///
/// Implemented for any `Fn(&[&V], &Outcome<R>) -> String`, so a closure can
/// stand in for a formatter.
pub trait Formatter<V, R> {
    fn format(&self, args: &[&V], outcome: &Outcome<R>) -> String;
}

impl<V, R, F> Formatter<V, R> for F
where
    F: Fn(&[&V], &Outcome<R>) -> String,
{
    fn format(&self, args: &[&V], outcome: &Outcome<R>) -> String {
        self(args, outcome)
    }
}

/// `args: ("water", 1) => 2` followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgsAndResultFormatter;

impl<V: fmt::Debug, R: fmt::Debug> Formatter<V, R> for ArgsAndResultFormatter {
    fn format(&self, args: &[&V], outcome: &Outcome<R>) -> String {
        format!("args: {} => {:?}\n", format_args_tuple(args), outcome)
    }
}

/// Parenthesised, comma-separated `Debug` rendering; one argument keeps a trailing comma.
pub fn format_args_tuple<V: fmt::Debug>(args: &[&V]) -> String {
    let mut out = String::from("(");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{arg:?}");
    }
    if args.len() == 1 {
        out.push(',');
    }
    out.push(')');
    out
}

/// Concatenate the formatted records in order.
pub fn render_document<V, R>(
    records: &[ExecutionRecord<'_, V, R>],
    formatter: &dyn Formatter<V, R>,
) -> String {
    records
        .iter()
        .map(|r| formatter.format(&r.args, &r.outcome))
        .collect()
}
