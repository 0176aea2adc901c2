//! Placeholder substitution that keeps per-argument styling.
//!
//! String-table formatting only sees text, so it would flatten styled
//! arguments. The format string is therefore fetched with `${N}` markers as
//! arguments, split on those markers, and reassembled here with each
//! argument's styled value and annotations spliced in.

use crate::parser::{Fragment, parse_markers};
use crate::types::{Annotation, ResourceId, StyledText, StyledTextBuilder};

/// A resolved argument ready for substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArgument<'a> {
    pub value: StyledText,
    /// Annotations scoped to this argument's rendered span, outermost first.
    pub annotations: &'a [Annotation],
}

impl ResolvedArgument<'static> {
    /// An argument without annotations of its own.
    pub fn plain(value: StyledText) -> Self {
        ResolvedArgument {
            value,
            annotations: &[],
        }
    }
}

/// Runs `f` inside nested scopes for `annotations`.
///
/// The first annotation becomes the outermost scope; `f` appends at the
/// innermost one. An empty list runs `f` directly.
pub fn apply_annotations(
    builder: &mut StyledTextBuilder,
    annotations: &[Annotation],
    f: impl FnOnce(&mut StyledTextBuilder),
) {
    for annotation in annotations {
        builder.push(annotation.clone());
    }
    f(builder);
    for _ in annotations {
        builder.pop();
    }
}

/// Assembles `format` (a string containing `${N}` markers) with `args`.
///
/// Markers are matched to arguments by their index, not by their position
/// in the string, so a localized string may reorder, repeat, or omit
/// arguments. A repeated marker re-applies its argument's annotations at
/// every occurrence. The whole result is wrapped in `base_annotations`.
///
/// # Panics
///
/// Panics if a marker index is outside `args`. The resource's placeholder
/// count must match the number of arguments declared for it; a mismatch
/// means the shipped resource data is malformed.
///
/// # Example
///
/// ```
/// use uitext::resolver::{ResolvedArgument, substitute};
/// use uitext::{Annotation, Color, ResourceId, SpanStyle, StyledText};
///
/// let red = [Annotation::span(SpanStyle::builder().color(Color::RED).build())];
/// let args = [
///     ResolvedArgument::plain(StyledText::plain("Alice")),
///     ResolvedArgument { value: StyledText::plain("Bob"), annotations: &red },
/// ];
///
/// let text = substitute(&ResourceId::from_name("pair"), "${1} and ${0}", &args, &[]);
/// assert_eq!(text.to_markup(), "<span color=#ff0000>Bob</span> and Alice");
/// ```
pub fn substitute(
    resource: &ResourceId,
    format: &str,
    args: &[ResolvedArgument<'_>],
    base_annotations: &[Annotation],
) -> StyledText {
    let fragments = parse_markers(format);
    let mut builder = StyledTextBuilder::new();

    apply_annotations(&mut builder, base_annotations, |builder| {
        for fragment in &fragments {
            match fragment {
                Fragment::Literal(text) => builder.append(text),
                Fragment::Marker(index) => {
                    let Some(arg) = args.get(*index) else {
                        panic!(
                            "resource '{resource}' references placeholder {index} but only {} \
                             arguments were declared",
                            args.len()
                        );
                    };
                    apply_annotations(builder, arg.annotations, |builder| {
                        builder.append_styled(&arg.value);
                    });
                }
            }
        }
    });

    builder.build()
}
