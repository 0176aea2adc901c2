//! Synthetic placeholder markers.
//!
//! When an argument carries styling, its text cannot go through the string
//! table's own formatting. Instead the table is asked to format the string
//! with `${0}`, `${1}`, ... in place of the real arguments, and the result is
//! split back apart on those markers. Resource authors must not write literal
//! `${digits}` sequences in their strings.

use super::ast::Fragment;
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::any;

/// The marker text standing in for the zero-based argument `index`.
///
/// ```
/// assert_eq!(uitext::parser::marker(2), "${2}");
/// ```
pub fn marker(index: usize) -> String {
    format!("${{{index}}}")
}

/// One marker per argument, in argument order.
pub fn markers(count: usize) -> Vec<String> {
    (0..count).map(marker).collect()
}

/// Split a resolved format string into literal fragments and markers.
///
/// Text that merely resembles a marker (`$`, `${}`, `${x}`, an index that
/// overflows `usize`) stays literal.
///
/// # Example
///
/// ```
/// use uitext::parser::{Fragment, parse_markers};
///
/// assert_eq!(
///     parse_markers("${1} before ${0}"),
///     vec![
///         Fragment::Marker(1),
///         Fragment::Literal(" before ".to_string()),
///         Fragment::Marker(0),
///     ]
/// );
/// ```
pub fn parse_markers(input: &str) -> Vec<Fragment> {
    let mut remaining = input;
    match fragments(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => parsed,
        // Every character is accepted as a literal, so this is unreachable in
        // practice; fall back to treating the whole input as text.
        _ => vec![Fragment::Literal(input.to_string())],
    }
}

/// Whether `input` contains at least one marker.
pub fn contains_marker(input: &str) -> bool {
    parse_markers(input)
        .iter()
        .any(|fragment| matches!(fragment, Fragment::Marker(_)))
}

fn fragments(input: &mut &str) -> ModalResult<Vec<Fragment>> {
    let parsed: Vec<Fragment> =
        repeat(0.., alt((marker_fragment, literal_char))).parse_next(input)?;

    let mut merged: Vec<Fragment> = Vec::with_capacity(parsed.len());
    for fragment in parsed {
        match fragment {
            Fragment::Literal(text) => {
                if let Some(Fragment::Literal(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(Fragment::Literal(text));
                }
            }
            marker @ Fragment::Marker(_) => merged.push(marker),
        }
    }
    Ok(merged)
}

fn marker_fragment(input: &mut &str) -> ModalResult<Fragment> {
    delimited("${", digit1.try_map(str::parse::<usize>), '}')
        .map(Fragment::Marker)
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Fragment> {
    any.map(|c: char| Fragment::Literal(c.to_string()))
        .parse_next(input)
}
