//! Tests for the styled text value, its builder, runs and markup.

use insta::assert_snapshot;
use uitext::resolver::{ResolvedArgument, apply_annotations, substitute};
use uitext::{
    Annotation, Color, FontStyle, FontWeight, LinkAnnotation, ParagraphStyle, ResourceId, Scope,
    SpanStyle, StyledText, StyledTextBuilder, TextAlign, TextDecoration,
};

fn red() -> Annotation {
    Annotation::span(SpanStyle::builder().color(Color::RED).build())
}

fn bold() -> Annotation {
    Annotation::span(SpanStyle::builder().font_weight(FontWeight::BOLD).build())
}

fn italic() -> Annotation {
    Annotation::span(SpanStyle::builder().font_style(FontStyle::Italic).build())
}

// =========================================================================
// Builder
// =========================================================================

#[test]
fn nested_scopes_record_depth_and_ranges() {
    let mut builder = StyledTextBuilder::new();
    builder.append("a");
    builder.push(red());
    builder.append("b");
    builder.push(bold());
    builder.append("c");
    builder.pop();
    builder.pop();
    builder.append("d");
    let text = builder.build();

    assert_eq!(text.as_str(), "abcd");
    let scopes = text.scopes();
    assert_eq!((scopes[0].range.clone(), scopes[0].depth), (1..3, 0));
    assert_eq!((scopes[1].range.clone(), scopes[1].depth), (2..3, 1));
}

#[test]
fn scopes_are_readable_from_crate_root_types() {
    let mut builder = StyledTextBuilder::new();
    builder.append("Cart: ");
    builder.with_scope(red(), |b| b.append("empty"));
    let text = builder.build();

    let scope: &Scope = &text.scopes()[0];
    assert_eq!(scope.range, 6..11);
    assert_eq!(scope.depth, 0);
    assert_eq!(scope.annotation, red());
}

#[test]
fn build_closes_open_scopes_at_end() {
    let mut builder = StyledTextBuilder::new();
    builder.push(red());
    builder.append("open");
    assert_eq!(builder.open_scopes(), 1);
    let text = builder.build();
    assert_eq!(text.scopes()[0].range, 0..4);
}

#[test]
#[should_panic(expected = "pop without an open scope")]
fn unbalanced_pop_panics() {
    StyledTextBuilder::new().pop();
}

#[test]
fn apply_annotations_nests_first_outermost() {
    let mut builder = StyledTextBuilder::new();
    apply_annotations(&mut builder, &[red(), bold(), italic()], |b| {
        assert_eq!(b.open_scopes(), 3);
        b.append("x");
    });
    assert_eq!(builder.open_scopes(), 0);
    let text = builder.build();

    let depths: Vec<usize> = text.scopes().iter().map(|scope| scope.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    assert_eq!(text.scopes()[0].annotation, red());
    assert_eq!(text.scopes()[2].annotation, italic());
}

#[test]
fn apply_annotations_with_empty_list_appends_directly() {
    let mut builder = StyledTextBuilder::new();
    apply_annotations(&mut builder, &[], |b| b.append("plain"));
    let text = builder.build();
    assert_eq!(text, StyledText::plain("plain"));
}

#[test]
fn append_styled_offsets_nested_scopes() {
    let mut inner = StyledTextBuilder::new();
    inner.append("x");
    inner.with_scope(bold(), |b| b.append("yz"));
    let inner = inner.build();

    let mut outer = StyledTextBuilder::new();
    outer.append("12");
    outer.with_scope(red(), |b| b.append_styled(&inner));
    let text = outer.build();

    assert_eq!(text.as_str(), "12xyz");
    assert_eq!(text.scopes()[1].range, 3..5);
    assert_eq!(text.scopes()[1].depth, 1);
    assert_snapshot!(text.to_markup(), @"12<span color=#ff0000>x<span weight=700>yz</span></span>");
}

#[test]
fn concat_of_plain_parts_is_plain() {
    let text = StyledText::concat([StyledText::plain("a"), StyledText::from("b")]);
    assert_eq!(text, StyledText::plain("ab"));
    assert!(!text.is_styled());
    assert!(StyledText::concat([]).is_empty());
}

// =========================================================================
// Runs
// =========================================================================

#[test]
fn runs_split_on_scope_boundaries() {
    let mut builder = StyledTextBuilder::new();
    builder.append("Cart: ");
    builder.with_scope(red(), |b| {
        b.append("30 ");
        b.with_scope(bold(), |b| b.append("items"));
    });
    let text = builder.build();
    let runs = text.runs();

    let texts: Vec<&str> = runs.iter().map(|run| run.text).collect();
    assert_eq!(texts, vec!["Cart: ", "30 ", "items"]);
    assert!(runs[0].annotations.is_empty());
    assert_eq!(runs[2].annotations, vec![&red(), &bold()]);
    assert_eq!(
        runs[2].span_style(),
        SpanStyle::builder()
            .color(Color::RED)
            .font_weight(FontWeight::BOLD)
            .build()
    );
}

#[test]
fn innermost_span_attribute_wins() {
    let blue = Annotation::span(SpanStyle::builder().color(Color::BLUE).build());
    let mut builder = StyledTextBuilder::new();
    builder.with_scope(red(), |b| b.with_scope(blue, |b| b.append("x")));
    let text = builder.build();
    assert_eq!(text.runs()[0].span_style().color, Some(Color::BLUE));
}

#[test]
fn run_reports_innermost_link() {
    let link = LinkAnnotation::builder()
        .target(uitext::LinkTarget::Url("https://example.com".to_string()))
        .style(
            SpanStyle::builder()
                .decoration(TextDecoration::Underline)
                .build(),
        )
        .build();
    let mut builder = StyledTextBuilder::new();
    builder.with_scope(link.clone().into(), |b| b.append("here"));
    let text = builder.build();
    let runs = text.runs();

    assert_eq!(runs[0].link(), Some(&Annotation::Link(link)));
    assert_eq!(runs[0].span_style().decoration, Some(TextDecoration::Underline));
}

#[test]
fn empty_scopes_cover_no_run() {
    let mut builder = StyledTextBuilder::new();
    builder.append("ab");
    builder.with_scope(red(), |_| {});
    let text = builder.build();
    assert!(text.is_styled());
    assert_eq!(text.runs().len(), 1);
    assert!(text.runs()[0].annotations.is_empty());
}

// =========================================================================
// Markup
// =========================================================================

#[test]
fn markup_of_legal_footer() {
    let terms = [
        Annotation::Link(LinkAnnotation::url("https://example.com/terms")),
        bold(),
    ];
    let privacy = [Annotation::Link(LinkAnnotation::clickable("privacy"))];
    let args = [
        ResolvedArgument {
            value: StyledText::plain("Terms of Service"),
            annotations: &terms,
        },
        ResolvedArgument {
            value: StyledText::plain("Privacy Policy"),
            annotations: &privacy,
        },
    ];
    let paragraph = Annotation::paragraph(
        ParagraphStyle::builder()
            .text_align(TextAlign::Center)
            .build(),
    );

    let text = substitute(
        &ResourceId::from_name("legal_footer_example"),
        "By continuing you agree to our ${0} and ${1}.",
        &args,
        &[paragraph],
    );

    assert_snapshot!(
        text.to_markup(),
        @"<paragraph align=center>By continuing you agree to our <link url=https://example.com/terms><span weight=700>Terms of Service</span></link> and <link tag=privacy>Privacy Policy</link>.</paragraph>"
    );
}

#[test]
fn markup_lists_every_span_attribute() {
    let style = SpanStyle::builder()
        .color(Color::rgba(0x12, 0x34, 0x56, 0x80))
        .background(Color::WHITE)
        .font_weight(FontWeight::BOLD)
        .font_style(FontStyle::Italic)
        .font_size(14.0)
        .decoration(TextDecoration::LineThrough)
        .build();
    let mut builder = StyledTextBuilder::new();
    builder.with_scope(style.into(), |b| b.append("x"));

    assert_snapshot!(
        builder.build().to_markup(),
        @"<span color=#12345680 background=#ffffff weight=700 style=italic size=14 decoration=line-through>x</span>"
    );
}

#[test]
fn sibling_scopes_close_before_next_opens() {
    let mut builder = StyledTextBuilder::new();
    builder.with_scope(red(), |b| b.append("a"));
    builder.with_scope(bold(), |b| b.append("b"));
    assert_snapshot!(
        builder.build().to_markup(),
        @"<span color=#ff0000>a</span><span weight=700>b</span>"
    );
}

#[test]
fn display_drops_styling() {
    let mut builder = StyledTextBuilder::new();
    builder.with_scope(red(), |b| b.append("styled"));
    let text = builder.build();
    assert_eq!(text.to_string(), "styled");
    assert_eq!(String::from(text), "styled");
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn styled_text_serializes_scopes() {
    let mut builder = StyledTextBuilder::new();
    builder.append("a");
    builder.with_scope(red(), |b| b.append("b"));
    let text = builder.build();

    let json = serde_json::to_string(&text).unwrap();
    assert_snapshot!(
        json,
        @r#"{"text":"ab","scopes":[{"annotation":{"kind":"span","value":{"color":{"r":255,"g":0,"b":0,"a":255}}},"range":{"start":1,"end":2},"depth":0}]}"#
    );
    let back: StyledText = serde_json::from_str(&json).unwrap();
    assert_eq!(back, text);
}

#[test]
fn plain_text_serializes_without_scopes() {
    let json = serde_json::to_string(&StyledText::plain("x")).unwrap();
    assert_eq!(json, r#"{"text":"x"}"#);
}
