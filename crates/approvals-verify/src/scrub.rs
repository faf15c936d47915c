//! Text scrubbers applied to a document before it is compared.
//!
//! A scrubber is any `Fn(&str) -> String`. They compose in order, so volatile
//! content (timestamps, ids, platform line endings) can be masked before the
//! byte-for-byte comparison.

use std::collections::HashMap;

use regex::Regex;

use crate::error::ApprovalError;

pub type Scrubber = Box<dyn Fn(&str) -> String>;

/// `\r\n` and lone `\r` become `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strip trailing spaces and tabs from every line.
pub fn trim_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace every match of `pattern` with `replacement` (`$1`-style groups allowed).
pub fn regex_scrubber(
    pattern: &str,
    replacement: &str,
) -> Result<impl Fn(&str) -> String, ApprovalError> {
    let regex = Regex::new(pattern)?;
    let replacement = replacement.to_string();
    Ok(move |text: &str| regex.replace_all(text, replacement.as_str()).into_owned())
}

/// Replace matches with `<label_N>`, numbering distinct matches in order of
/// first appearance. Equal matches share a number, so relationships between
/// masked values survive scrubbing.
pub fn numbered_regex_scrubber(
    pattern: &str,
    label: &str,
) -> Result<impl Fn(&str) -> String, ApprovalError> {
    let regex = Regex::new(pattern)?;
    let label = label.to_string();
    Ok(move |text: &str| {
        let mut seen: HashMap<String, usize> = HashMap::new();
        regex
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let next = seen.len();
                let n = *seen.entry(caps[0].to_string()).or_insert(next);
                format!("<{label}_{n}>")
            })
            .into_owned()
    })
}

/// Apply `scrubbers` left to right.
pub fn combine_scrubbers(scrubbers: Vec<Scrubber>) -> impl Fn(&str) -> String {
    move |text: &str| apply_all(&scrubbers, text)
}

pub(crate) fn apply_all(scrubbers: &[Scrubber], text: &str) -> String {
    scrubbers
        .iter()
        .fold(text.to_string(), |acc, scrub| scrub(&acc))
}
