//! Miette diagnostics for string table load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;
use uitext::LoadError;

/// A miette-compatible diagnostic pointing into a table file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(uitext::table))]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TableDiagnostic {
    fn new(path: &Path, content: &str, offset: usize, len: usize, message: String) -> Self {
        let offset = floor_char_boundary(content, offset.min(content.len()));
        let len = len.min(content.len() - offset);
        TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help: None,
        }
    }

    fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Convert a load error into a report, pointing into `content` (the file's
/// text) when it is available.
pub fn load_error_report(path: &Path, content: Option<&str>, err: LoadError) -> Report {
    let Some(content) = content else {
        return miette!("{err}");
    };

    match err {
        LoadError::Json { source, .. } => json_error_report(
            path,
            content,
            &source,
            "invalid string table",
            r#"expected { "strings": { name: format }, "plurals": { name: { category: format } } }"#,
        ),
        LoadError::Template {
            resource,
            format,
            line,
            column,
            message,
            ..
        } => {
            let name = resource.split(':').next().unwrap_or(&resource);
            let offset = locate_in_format(content, name, &format, line, column);
            TableDiagnostic::new(
                path,
                content,
                offset,
                1,
                format!("invalid format string in '{resource}': {message}"),
            )
            .with_help("arguments are written %s or %1$s, a literal percent sign as %%")
            .into()
        }
        LoadError::UnknownPluralCategory {
            resource, category, ..
        } => {
            let key = quoted(&category);
            let offset = find_after(content, &quoted(&resource), &key).unwrap_or(0);
            TableDiagnostic::new(
                path,
                content,
                offset,
                key.len(),
                format!("plural resource '{resource}' has unknown category '{category}'"),
            )
            .with_help("plural categories are zero, one, two, few, many and other")
            .into()
        }
        other => miette!("{other}"),
    }
}

/// Report a JSON syntax or shape error at the position serde_json gives.
pub fn json_error_report(
    path: &Path,
    content: &str,
    err: &serde_json::Error,
    what: &str,
    help: &str,
) -> Report {
    let offset = offset_of(content, err.line(), err.column());
    TableDiagnostic::new(path, content, offset, 1, format!("{what}: {err}"))
        .with_help(help)
        .into()
}

/// Byte offset of a one-based line and column within `content`.
fn offset_of(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}

/// Find the offending position of `format` inside the JSON text.
///
/// Falls back to the start of the string literal when the literal contains
/// escapes (positions inside the format would no longer line up), and to
/// the start of the file when the literal cannot be found.
fn locate_in_format(content: &str, name: &str, format: &str, line: usize, column: usize) -> usize {
    let literal = quoted(format);
    let Some(start) = find_after(content, &quoted(name), &literal) else {
        return 0;
    };
    if literal.len() == format.len() + 2 {
        start + 1 + offset_of(format, line, column)
    } else {
        start
    }
}

/// Position of `needle` after the first occurrence of `anchor`.
fn find_after(content: &str, anchor: &str, needle: &str) -> Option<usize> {
    let from = content.find(anchor).map_or(0, |pos| pos + anchor.len());
    content[from..].find(needle).map(|pos| from + pos)
}

fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

fn floor_char_boundary(content: &str, mut offset: usize) -> usize {
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
