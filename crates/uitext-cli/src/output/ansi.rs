//! Terminal rendering of styled text.

use owo_colors::{OwoColorize, Stream, Style};
use uitext::{Color, FontStyle, FontWeight, SpanStyle, StyledRun, StyledText, TextDecoration};

/// Render `text` with ANSI escapes, one style per run.
///
/// Colors are emitted as truecolor. Links without an explicit decoration are
/// underlined. Nothing is emitted when color output is disabled.
pub fn render_ansi(text: &StyledText) -> String {
    text.runs()
        .iter()
        .map(|run| {
            let style = run_style(run);
            run.text
                .if_supports_color(Stream::Stdout, |t| t.style(style))
                .to_string()
        })
        .collect()
}

fn run_style(run: &StyledRun<'_>) -> Style {
    let span = run.span_style();
    let mut style = span_to_style(&span);
    if run.link().is_some() && span.decoration.is_none() {
        style = style.underline();
    }
    style
}

fn span_to_style(span: &SpanStyle) -> Style {
    let mut style = Style::new();
    if let Some(Color { r, g, b, .. }) = span.color {
        style = style.truecolor(r, g, b);
    }
    if let Some(Color { r, g, b, .. }) = span.background {
        style = style.on_truecolor(r, g, b);
    }
    if span.font_weight.is_some_and(FontWeight::is_bold) {
        style = style.bold();
    }
    if span.font_style == Some(FontStyle::Italic) {
        style = style.italic();
    }
    match span.decoration {
        Some(TextDecoration::Underline) => style = style.underline(),
        Some(TextDecoration::LineThrough) => style = style.strikethrough(),
        Some(TextDecoration::None) | None => {}
    }
    style
}
