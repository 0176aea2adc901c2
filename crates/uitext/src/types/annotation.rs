use std::fmt::{Result as FmtResult, Write};

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{ParagraphStyle, SpanStyle};

/// A styling or link directive applied to a contiguous range of text.
///
/// Lists of annotations are applied as nested scopes: the first annotation
/// of a list becomes the outermost scope.
///
/// # Example
///
/// ```
/// use uitext::{Annotation, Color, SpanStyle};
///
/// let red: Annotation = SpanStyle::builder().color(Color::RED).build().into();
/// assert!(matches!(red, Annotation::Span(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Annotation {
    /// Character-level styling.
    Span(SpanStyle),

    /// Paragraph-level styling.
    Paragraph(ParagraphStyle),

    /// A hyperlink or clickable region, with optional link styling.
    Link(LinkAnnotation),
}

impl Annotation {
    pub fn span(style: SpanStyle) -> Self {
        Annotation::Span(style)
    }

    pub fn paragraph(style: ParagraphStyle) -> Self {
        Annotation::Paragraph(style)
    }

    /// A link to `url` without extra styling.
    pub fn url(url: impl Into<String>) -> Self {
        Annotation::Link(LinkAnnotation::url(url))
    }

    /// The span style this annotation contributes to the text it covers,
    /// if any. Links contribute their link style.
    pub fn span_style(&self) -> Option<&SpanStyle> {
        match self {
            Annotation::Span(style) => Some(style),
            Annotation::Link(link) => link.style.as_ref(),
            Annotation::Paragraph(_) => None,
        }
    }

    /// Name of the markup tag used by [`StyledText::to_markup`](super::StyledText::to_markup).
    pub(crate) fn tag_name(&self) -> &'static str {
        match self {
            Annotation::Span(_) => "span",
            Annotation::Paragraph(_) => "paragraph",
            Annotation::Link(_) => "link",
        }
    }

    pub(crate) fn write_opening_tag(&self, out: &mut String) -> FmtResult {
        write!(out, "<{}", self.tag_name())?;
        match self {
            Annotation::Span(style) => style.write_attributes(out)?,
            Annotation::Paragraph(style) => style.write_attributes(out)?,
            Annotation::Link(link) => {
                match &link.target {
                    LinkTarget::Url(url) => write!(out, " url={url}")?,
                    LinkTarget::Clickable { tag } => write!(out, " tag={tag}")?,
                }
                if let Some(style) = &link.style {
                    style.write_attributes(out)?;
                }
            }
        }
        out.push('>');
        Ok(())
    }
}

impl From<SpanStyle> for Annotation {
    fn from(style: SpanStyle) -> Self {
        Annotation::Span(style)
    }
}

impl From<ParagraphStyle> for Annotation {
    fn from(style: ParagraphStyle) -> Self {
        Annotation::Paragraph(style)
    }
}

impl From<LinkAnnotation> for Annotation {
    fn from(link: LinkAnnotation) -> Self {
        Annotation::Link(link)
    }
}

/// Where a link leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// An external URL opened by the platform.
    Url(String),

    /// An in-app click target identified by `tag`; the view layer decides
    /// what a click does.
    Clickable { tag: String },
}

/// A link annotation: target plus the style the link text is drawn with.
///
/// ```
/// use uitext::{Color, LinkAnnotation, LinkTarget, SpanStyle, TextDecoration};
///
/// let link = LinkAnnotation::builder()
///     .target(LinkTarget::Url("https://example.com".to_string()))
///     .style(
///         SpanStyle::builder()
///             .color(Color::BLUE)
///             .decoration(TextDecoration::Underline)
///             .build(),
///     )
///     .build();
///
/// assert!(link.style.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct LinkAnnotation {
    pub target: LinkTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SpanStyle>,
}

impl LinkAnnotation {
    /// An unstyled link to `url`.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            target: LinkTarget::Url(url.into()),
            style: None,
        }
    }

    /// An unstyled in-app click target.
    pub fn clickable(tag: impl Into<String>) -> Self {
        Self {
            target: LinkTarget::Clickable { tag: tag.into() },
            style: None,
        }
    }
}
