//! A closure-based builder for composing [`UIText`] trees.
//!
//! ```
//! use uitext::{Color, ResourceId, SpanStyle, build_ui_text};
//!
//! const STATUS: ResourceId = ResourceId::from_name("shopping_cart_status");
//! const INSERT: ResourceId = ResourceId::from_name("shopping_cart_status_insert_shopping_cart");
//!
//! let text = build_ui_text(|b| {
//!     b.res_annotated(STATUS, |a| {
//!         a.arg("5");
//!         a.arg_with(uitext::UIText::res(INSERT), |ann| {
//!             ann.span(SpanStyle::builder().color(Color::RED).build());
//!         });
//!     });
//!     b.raw(" ");
//! });
//!
//! assert!(matches!(text, uitext::UIText::Compound(ref parts) if parts.len() == 2));
//! ```

use super::{AnnotatedArgument, Argument, UIText};
use crate::types::{Annotation, LinkAnnotation, ParagraphStyle, ResourceId, SpanStyle};

/// Runs `f` on a fresh [`UITextBuilder`] and returns the composed text.
pub fn build_ui_text(f: impl FnOnce(&mut UITextBuilder)) -> UIText {
    let mut builder = UITextBuilder::new();
    f(&mut builder);
    builder.build()
}

/// Collects components in declaration order.
#[derive(Debug, Default)]
pub struct UITextBuilder {
    components: Vec<UIText>,
}

impl UITextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.node(UIText::Raw(text.into()))
    }

    pub fn res(&mut self, id: impl Into<ResourceId>) -> &mut Self {
        self.node(UIText::res(id))
    }

    pub fn res_with(
        &mut self,
        id: impl Into<ResourceId>,
        f: impl FnOnce(&mut ResBuilder),
    ) -> &mut Self {
        let mut args = ResBuilder::default();
        f(&mut args);
        self.node(UIText::Res {
            id: id.into(),
            args: args.args,
        })
    }

    /// A plural resource whose only argument is its quantity.
    pub fn plural_res(&mut self, id: impl Into<ResourceId>, quantity: i64) -> &mut Self {
        self.node(UIText::plural_res(id, quantity))
    }

    /// A plural resource with explicit arguments. If `f` adds none, the
    /// quantity is used as the sole argument.
    pub fn plural_res_with(
        &mut self,
        id: impl Into<ResourceId>,
        quantity: i64,
        f: impl FnOnce(&mut ResBuilder),
    ) -> &mut Self {
        let mut args = ResBuilder::default();
        f(&mut args);
        self.node(UIText::PluralRes {
            id: id.into(),
            quantity,
            args: args.args,
        })
    }

    pub fn res_annotated(
        &mut self,
        id: impl Into<ResourceId>,
        f: impl FnOnce(&mut ResAnnotatedBuilder),
    ) -> &mut Self {
        let mut config = ResAnnotatedBuilder::default();
        f(&mut config);
        self.node(UIText::ResAnnotated {
            id: id.into(),
            args: config.args,
            base_annotations: config.annotations,
        })
    }

    pub fn plural_res_annotated(
        &mut self,
        id: impl Into<ResourceId>,
        quantity: i64,
        f: impl FnOnce(&mut ResAnnotatedBuilder),
    ) -> &mut Self {
        let mut config = ResAnnotatedBuilder::default();
        f(&mut config);
        self.node(UIText::PluralResAnnotated {
            id: id.into(),
            quantity,
            args: config.args,
            base_annotations: config.annotations,
        })
    }

    /// Appends an already built node.
    pub fn node(&mut self, text: UIText) -> &mut Self {
        self.components.push(text);
        self
    }

    /// Collapses the components: none yields `Raw("")`, a single one is
    /// returned as is, several become a `Compound`.
    pub fn build(self) -> UIText {
        let mut components = self.components;
        match components.len() {
            0 => UIText::Raw(String::new()),
            1 => components.swap_remove(0),
            _ => UIText::Compound(components),
        }
    }
}

/// Positional arguments of a `Res` or `PluralRes` node.
#[derive(Debug, Default)]
pub struct ResBuilder {
    args: Vec<Argument>,
}

impl ResBuilder {
    pub fn arg(&mut self, arg: impl Into<Argument>) -> &mut Self {
        self.args.push(arg.into());
        self
    }
}

/// Arguments and base annotations of an annotated node.
#[derive(Debug, Default)]
pub struct ResAnnotatedBuilder {
    annotations: Vec<Annotation>,
    args: Vec<AnnotatedArgument>,
}

impl ResAnnotatedBuilder {
    /// Adds base annotations wrapping the whole resolved string.
    pub fn annotation(&mut self, f: impl FnOnce(&mut AnnotationsBuilder)) -> &mut Self {
        let mut annotations = AnnotationsBuilder::default();
        f(&mut annotations);
        self.annotations.extend(annotations.annotations);
        self
    }

    /// Adds a single base annotation.
    pub fn base(&mut self, annotation: impl Into<Annotation>) -> &mut Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn arg(&mut self, value: impl Into<Argument>) -> &mut Self {
        self.args.push(AnnotatedArgument::new(value));
        self
    }

    /// Adds an argument with the annotations collected by `f`.
    pub fn arg_with(
        &mut self,
        value: impl Into<Argument>,
        f: impl FnOnce(&mut AnnotationsBuilder),
    ) -> &mut Self {
        let mut annotations = AnnotationsBuilder::default();
        f(&mut annotations);
        self.args.push(value.into().annotated(annotations.annotations));
        self
    }

    /// Adds an argument with a single annotation.
    pub fn arg_annotated(
        &mut self,
        value: impl Into<Argument>,
        annotation: impl Into<Annotation>,
    ) -> &mut Self {
        self.args.push(value.into().annotated([annotation.into()]));
        self
    }
}

/// An ordered list of annotations, outermost first.
#[derive(Debug, Default)]
pub struct AnnotationsBuilder {
    annotations: Vec<Annotation>,
}

impl AnnotationsBuilder {
    pub fn span(&mut self, style: SpanStyle) -> &mut Self {
        self.push(Annotation::Span(style))
    }

    pub fn paragraph(&mut self, style: ParagraphStyle) -> &mut Self {
        self.push(Annotation::Paragraph(style))
    }

    pub fn link(&mut self, link: LinkAnnotation) -> &mut Self {
        self.push(Annotation::Link(link))
    }

    pub fn push(&mut self, annotation: impl Into<Annotation>) -> &mut Self {
        self.annotations.push(annotation.into());
        self
    }
}
