use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{Annotation, SpanStyle};

/// An annotation applied to a byte range of a [`StyledText`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub annotation: Annotation,
    /// Byte range into the text. Always lies on `char` boundaries.
    pub range: Range<usize>,
    /// Number of scopes enclosing this one.
    pub depth: usize,
}

/// A resolved, possibly styled, text value.
///
/// Styling is kept as a list of nested scopes in the order they were opened,
/// which is the order in which a consuming rich-text builder must re-open
/// them. A scope's `depth` records its nesting explicitly, so two scopes over
/// the same range still have a well-defined inner and outer one.
///
/// # Example
///
/// ```
/// use uitext::{Color, SpanStyle, StyledText, StyledTextBuilder};
///
/// let mut builder = StyledTextBuilder::new();
/// builder.append("Cart: ");
/// builder.with_scope(SpanStyle::builder().color(Color::RED).build().into(), |b| {
///     b.append("empty");
/// });
/// let text = builder.build();
///
/// assert_eq!(text.as_str(), "Cart: empty");
/// assert!(text.is_styled());
/// assert_eq!(text.scopes()[0].range, 6..11);
///
/// assert!(!StyledText::plain("Cart").is_styled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    scopes: Vec<Scope>,
}

impl StyledText {
    /// Returns an empty, unstyled text.
    pub fn empty() -> StyledText {
        StyledText::default()
    }

    /// Wraps `text` without any styling.
    pub fn plain(text: impl Into<String>) -> StyledText {
        StyledText {
            text: text.into(),
            scopes: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Drops the styling and returns the text.
    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether any annotation scope is attached, including empty ones.
    pub fn is_styled(&self) -> bool {
        !self.scopes.is_empty()
    }

    /// Scopes in opening order; enclosing scopes come before enclosed ones.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Concatenates `parts` in order, keeping every part's styling.
    ///
    /// Unstyled parts contribute plain text, so concatenating only unstyled
    /// parts yields an unstyled result.
    pub fn concat(parts: impl IntoIterator<Item = StyledText>) -> StyledText {
        let mut builder = StyledTextBuilder::new();
        for part in parts {
            builder.append_styled(&part);
        }
        builder.build()
    }

    /// Splits the text into maximal runs covered by the same set of
    /// annotations.
    ///
    /// Each run lists the annotations covering it from outermost to
    /// innermost. Empty scopes never cover a run.
    pub fn runs(&self) -> Vec<StyledRun<'_>> {
        let mut boundaries: Vec<usize> = vec![0, self.text.len()];
        for scope in &self.scopes {
            boundaries.push(scope.range.start);
            boundaries.push(scope.range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        boundaries
            .windows(2)
            .map(|pair| {
                let (start, end) = (pair[0], pair[1]);
                let annotations = self
                    .scopes
                    .iter()
                    .filter(|scope| scope.range.start <= start && end <= scope.range.end)
                    .map(|scope| &scope.annotation)
                    .collect();
                StyledRun {
                    text: &self.text[start..end],
                    range: start..end,
                    annotations,
                }
            })
            .collect()
    }

    /// Renders the scope tree as tags, e.g. `Cart: <span color=#ff0000>empty</span>`.
    ///
    /// This is a debugging and tooling format: text is not escaped.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        let mut open: Vec<&Scope> = Vec::new();

        for scope in &self.scopes {
            while open.len() > scope.depth {
                if let Some(closing) = open.pop() {
                    self.close_tag(closing, &mut cursor, &mut out);
                }
            }
            out.push_str(&self.text[cursor..scope.range.start]);
            cursor = scope.range.start;
            // Writing into a String cannot fail.
            let _ = scope.annotation.write_opening_tag(&mut out);
            open.push(scope);
        }
        while let Some(closing) = open.pop() {
            self.close_tag(closing, &mut cursor, &mut out);
        }
        out.push_str(&self.text[cursor..]);
        out
    }

    fn close_tag(&self, scope: &Scope, cursor: &mut usize, out: &mut String) {
        out.push_str(&self.text[*cursor..scope.range.end]);
        *cursor = scope.range.end;
        out.push_str("</");
        out.push_str(scope.annotation.tag_name());
        out.push('>');
    }
}

impl Display for StyledText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<StyledText> for String {
    fn from(text: StyledText) -> Self {
        text.text
    }
}

/// A run of text sharing one set of covering annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
    /// Covering annotations, outermost first.
    pub annotations: Vec<&'a Annotation>,
}

impl StyledRun<'_> {
    /// The effective span style of this run, innermost attributes winning.
    pub fn span_style(&self) -> SpanStyle {
        self.annotations
            .iter()
            .filter_map(|annotation| annotation.span_style())
            .fold(SpanStyle::default(), |outer, inner| outer.merge(inner))
    }

    /// The innermost link covering this run.
    pub fn link(&self) -> Option<&Annotation> {
        self.annotations
            .iter()
            .rev()
            .copied()
            .find(|annotation| matches!(annotation, Annotation::Link(_)))
    }
}

/// Stack-based builder for [`StyledText`].
///
/// `push` opens a scope at the current end of the text and `pop` closes the
/// most recently opened one, mirroring how rich-text builders nest styles.
#[derive(Debug, Default)]
pub struct StyledTextBuilder {
    text: String,
    scopes: Vec<Scope>,
    /// Indices into `scopes` of the currently open scopes.
    open: Vec<usize>,
}

impl StyledTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of currently open scopes.
    pub fn open_scopes(&self) -> usize {
        self.open.len()
    }

    /// Opens a scope for `annotation` at the current position.
    pub fn push(&mut self, annotation: Annotation) {
        let start = self.text.len();
        self.scopes.push(Scope {
            annotation,
            range: start..start,
            depth: self.open.len(),
        });
        self.open.push(self.scopes.len() - 1);
    }

    /// Closes the innermost open scope at the current position.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open; unbalanced pops are a programming error.
    pub fn pop(&mut self) {
        let index = self.open.pop().expect("pop without an open scope");
        self.scopes[index].range.end = self.text.len();
    }

    /// Appends unstyled text inside the currently open scopes.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends `other` inside the currently open scopes, nesting its own
    /// scopes below them.
    pub fn append_styled(&mut self, other: &StyledText) {
        let offset = self.text.len();
        let base_depth = self.open.len();
        self.scopes.extend(other.scopes.iter().map(|scope| Scope {
            annotation: scope.annotation.clone(),
            range: scope.range.start + offset..scope.range.end + offset,
            depth: scope.depth + base_depth,
        }));
        self.text.push_str(&other.text);
    }

    /// Runs `f` inside a scope for `annotation`.
    pub fn with_scope(&mut self, annotation: Annotation, f: impl FnOnce(&mut Self)) {
        self.push(annotation);
        f(self);
        self.pop();
    }

    /// Finishes the text, closing any scope still open at the end.
    pub fn build(mut self) -> StyledText {
        let end = self.text.len();
        while let Some(index) = self.open.pop() {
            self.scopes[index].range.end = end;
        }
        StyledText {
            text: self.text,
            scopes: self.scopes,
        }
    }
}
