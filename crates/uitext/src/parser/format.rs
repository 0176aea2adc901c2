//! Format string parser using winnow.
//!
//! Parses string-table format strings into an AST. Handles:
//! - Literal text segments
//! - Sequential specifiers: `%s`
//! - Explicitly numbered specifiers: `%1$s`, `%2$s`, ... (one-based)
//! - The escape sequence `%%`
//!
//! Width, precision and type specifiers (`%d`, `%.2f`, ...) are rejected:
//! arguments always arrive as pre-stringified text.

use super::ast::*;
use super::error::ParseError;
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::none_of;

/// Parse a format string into an AST.
///
/// # Example
///
/// ```
/// use uitext::parser::{ArgumentRef, FormatSegment, parse_format};
///
/// let template = parse_format("Hello, %s!").unwrap();
/// assert_eq!(
///     template.segments,
///     vec![
///         FormatSegment::Literal("Hello, ".to_string()),
///         FormatSegment::Argument(ArgumentRef::Next),
///         FormatSegment::Literal("!".to_string()),
///     ]
/// );
/// ```
pub fn parse_format(input: &str) -> Result<FormatTemplate, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: unexpected_message(remaining),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

fn unexpected_message(remaining: &str) -> String {
    if let Some(rest) = remaining.strip_prefix('%') {
        let end = rest
            .find(|c: char| c.is_ascii_alphabetic())
            .map_or(remaining.len(), |i| i + 2);
        let specifier = &remaining[..end];
        format!("unsupported format specifier '{specifier}', use %s or %N$s")
    } else {
        format!(
            "unexpected character: '{}'",
            remaining.chars().next().unwrap_or('?')
        )
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

fn template(input: &mut &str) -> ModalResult<FormatTemplate> {
    let segments: Vec<FormatSegment> = repeat(0.., segment).parse_next(input)?;
    Ok(FormatTemplate {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<FormatSegment>) -> Vec<FormatSegment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            FormatSegment::Literal(text) => {
                if let Some(FormatSegment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(FormatSegment::Literal(text));
                }
            }
            argument @ FormatSegment::Argument(_) => result.push(argument),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<FormatSegment> {
    alt((percent_escape, indexed_argument, next_argument, literal_char)).parse_next(input)
}

/// `%%` -> `%`
fn percent_escape(input: &mut &str) -> ModalResult<FormatSegment> {
    "%%".value(FormatSegment::Literal("%".to_string()))
        .parse_next(input)
}

/// `%s`
fn next_argument(input: &mut &str) -> ModalResult<FormatSegment> {
    "%s".value(FormatSegment::Argument(ArgumentRef::Next))
        .parse_next(input)
}

/// `%N$s` with one-based `N`.
fn indexed_argument(input: &mut &str) -> ModalResult<FormatSegment> {
    delimited('%', digit1.try_map(str::parse::<usize>), "$s")
        .verify(|position: &usize| *position >= 1)
        .map(|position| FormatSegment::Argument(ArgumentRef::Index(position - 1)))
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<FormatSegment> {
    none_of('%')
        .map(|c: char| FormatSegment::Literal(c.to_string()))
        .parse_next(input)
}
