//! Markdown tables for row-set fixtures.

use std::fmt::Display;

/// Render `rows` under `columns` as a markdown table:
///
/// ```text
/// | id | name |
/// | --- | --- |
/// | 1 | Chad |
/// ```
///
/// There is no trailing newline after the last row.
pub fn markdown_table<C: Display, V: Display>(columns: &[C], rows: &[Vec<V>]) -> String {
    let header = table_row(columns);
    let dashes = table_row(&vec!["---"; columns.len()]);
    let data: Vec<String> = rows.iter().map(|row| table_row(row)).collect();
    format!("{header}\n{dashes}\n{}", data.join("\n"))
}

fn table_row<T: Display>(values: &[T]) -> String {
    let cells: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("| {} |", cells.join(" | "))
}
