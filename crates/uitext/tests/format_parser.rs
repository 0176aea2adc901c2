//! Tests for the format-string and marker parsers.

use uitext::parser::{
    ArgumentRef, FormatSegment, Fragment, ParseError, contains_marker, marker, markers,
    parse_format, parse_markers,
};

// =========================================================================
// Format Strings
// =========================================================================

#[test]
fn parse_plain_literal() {
    let template = parse_format("Proceed to checkout").unwrap();
    assert_eq!(
        template.segments,
        vec![FormatSegment::Literal("Proceed to checkout".to_string())]
    );
    assert_eq!(template.argument_count(), 0);
}

#[test]
fn parse_empty_string() {
    let template = parse_format("").unwrap();
    assert!(template.segments.is_empty());
}

#[test]
fn parse_sequential_arguments() {
    let template = parse_format("%s - %s").unwrap();
    assert_eq!(
        template.segments,
        vec![
            FormatSegment::Argument(ArgumentRef::Next),
            FormatSegment::Literal(" - ".to_string()),
            FormatSegment::Argument(ArgumentRef::Next),
        ]
    );
    assert_eq!(template.argument_count(), 2);
}

#[test]
fn parse_indexed_arguments_are_zero_based() {
    let template = parse_format("%2$s before %1$s").unwrap();
    assert_eq!(
        template.segments,
        vec![
            FormatSegment::Argument(ArgumentRef::Index(1)),
            FormatSegment::Literal(" before ".to_string()),
            FormatSegment::Argument(ArgumentRef::Index(0)),
        ]
    );
    assert_eq!(template.argument_count(), 2);
}

#[test]
fn repeated_index_counts_once() {
    let template = parse_format("%1$s and %1$s").unwrap();
    assert_eq!(template.argument_count(), 1);
}

#[test]
fn percent_escape_merges_into_literal() {
    let template = parse_format("100%% of %s").unwrap();
    assert_eq!(
        template.segments,
        vec![
            FormatSegment::Literal("100% of ".to_string()),
            FormatSegment::Argument(ArgumentRef::Next),
        ]
    );
    assert_eq!(template.literal_text(), "100% of ");
}

#[test]
fn unicode_literals_are_preserved() {
    let template = parse_format("Coș: %1$s / %2$s").unwrap();
    assert_eq!(template.literal_text(), "Coș:  / ");
    assert_eq!(template.argument_count(), 2);
}

#[test]
fn unsupported_specifier_reports_position() {
    let err = parse_format("Total: %d items").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            line: 1,
            column: 8,
            message: "unsupported format specifier '%d', use %s or %N$s".to_string(),
        }
    );
}

#[test]
fn zero_index_is_rejected() {
    let err = parse_format("%0$s").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }));
}

#[test]
fn trailing_percent_is_rejected() {
    let err = parse_format("50%").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { column: 3, .. }));
    let ParseError::Syntax { message, .. } = err;
    assert!(message.starts_with("unsupported format specifier '%'"));
}

#[test]
fn error_position_counts_lines() {
    let err = parse_format("First line\nsecond %x").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 2, column: 8, .. }));
}

// =========================================================================
// Markers
// =========================================================================

#[test]
fn marker_text() {
    assert_eq!(marker(0), "${0}");
    assert_eq!(markers(3), vec!["${0}", "${1}", "${2}"]);
    assert!(markers(0).is_empty());
}

#[test]
fn parse_markers_splits_literals_and_markers() {
    assert_eq!(
        parse_markers("Cart: ${0} - ${1}"),
        vec![
            Fragment::Literal("Cart: ".to_string()),
            Fragment::Marker(0),
            Fragment::Literal(" - ".to_string()),
            Fragment::Marker(1),
        ]
    );
}

#[test]
fn parse_markers_handles_adjacent_and_repeated_markers() {
    assert_eq!(
        parse_markers("${0}${0}${12}"),
        vec![Fragment::Marker(0), Fragment::Marker(0), Fragment::Marker(12)]
    );
}

#[test]
fn marker_lookalikes_stay_literal() {
    assert_eq!(
        parse_markers("$5 ${} ${x} {0} $"),
        vec![Fragment::Literal("$5 ${} ${x} {0} $".to_string())]
    );
    assert!(!contains_marker("$5 ${} ${x}"));
    assert!(contains_marker("Total: ${3}"));
}

#[test]
fn parse_markers_of_empty_string() {
    assert!(parse_markers("").is_empty());
}
