use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use bon::Builder;
use serde::{Deserialize, Serialize};

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != u8::MAX {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Font weight on the usual 100..=900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Whether this weight should render as bold on terminals and other
    /// two-weight targets.
    pub fn is_bold(self) -> bool {
        self >= FontWeight::BOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    Center,
    End,
    Justify,
}

/// Character-level styling applied to a range of text.
///
/// Every attribute is optional; unset attributes inherit from enclosing
/// scopes when a renderer resolves the effective style of a run.
///
/// # Example
///
/// ```
/// use uitext::{Color, FontWeight, SpanStyle};
///
/// let style = SpanStyle::builder()
///     .color(Color::RED)
///     .font_weight(FontWeight::BOLD)
///     .build();
///
/// assert_eq!(style.color, Some(Color::RED));
/// assert_eq!(style.background, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
}

impl SpanStyle {
    /// Returns a style where every attribute set on `inner` overrides the one
    /// on `self`.
    ///
    /// Folding the span styles covering a run from outermost to innermost
    /// with `merge` gives the innermost-wins effective style.
    pub fn merge(&self, inner: &SpanStyle) -> SpanStyle {
        SpanStyle {
            color: inner.color.or(self.color),
            background: inner.background.or(self.background),
            font_weight: inner.font_weight.or(self.font_weight),
            font_style: inner.font_style.or(self.font_style),
            font_size: inner.font_size.or(self.font_size),
            decoration: inner.decoration.or(self.decoration),
        }
    }

    /// Writes the set attributes as ` key=value` pairs.
    pub(crate) fn write_attributes(&self, out: &mut String) -> FmtResult {
        if let Some(color) = self.color {
            write!(out, " color={color}")?;
        }
        if let Some(background) = self.background {
            write!(out, " background={background}")?;
        }
        if let Some(weight) = self.font_weight {
            write!(out, " weight={}", weight.0)?;
        }
        if let Some(style) = self.font_style {
            let name = match style {
                FontStyle::Normal => "normal",
                FontStyle::Italic => "italic",
            };
            write!(out, " style={name}")?;
        }
        if let Some(size) = self.font_size {
            write!(out, " size={size}")?;
        }
        if let Some(decoration) = self.decoration {
            let name = match decoration {
                TextDecoration::None => "none",
                TextDecoration::Underline => "underline",
                TextDecoration::LineThrough => "line-through",
            };
            write!(out, " decoration={name}")?;
        }
        Ok(())
    }
}

/// Paragraph-level styling applied to a range of text.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Line height in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// First-line indent in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_indent: Option<f32>,
}

impl ParagraphStyle {
    pub(crate) fn write_attributes(&self, out: &mut String) -> FmtResult {
        if let Some(align) = self.text_align {
            let name = match align {
                TextAlign::Start => "start",
                TextAlign::Center => "center",
                TextAlign::End => "end",
                TextAlign::Justify => "justify",
            };
            write!(out, " align={name}")?;
        }
        if let Some(height) = self.line_height {
            write!(out, " line-height={height}")?;
        }
        if let Some(indent) = self.text_indent {
            write!(out, " indent={indent}")?;
        }
        Ok(())
    }
}
