//! Asynchronous resolution of [`UIText`] trees.
//!
//! Resolution is bottom-up: a node resolves its arguments (concurrently,
//! reassembled in declaration order), fetches its format string from the
//! string table, and substitutes. Compounds concatenate their children.

use std::borrow::Cow;

use futures::future::{self, BoxFuture, FutureExt, try_join_all};
use tracing::trace;

use crate::parser::markers;
use crate::resolver::substitution::{ResolvedArgument, substitute};
use crate::resolver::{ResolveError, StringTable};
use crate::text::{AnnotatedArgument, Argument, UIText};
use crate::types::{Annotation, ResourceId, StyledText};

/// Resolve `node` against `table`.
///
/// Boxed because the tree is recursive.
pub(crate) fn resolve_node<'a, T: StringTable>(
    node: &'a UIText,
    table: &'a T,
) -> BoxFuture<'a, Result<StyledText, ResolveError>> {
    async move {
        match node {
            UIText::Raw(text) => Ok(StyledText::plain(text.as_str())),
            UIText::Res { id, args } => {
                let resolved = resolve_arguments(args, table).await?;
                resolve_plain_args(id, None, resolved, table).await
            }
            UIText::PluralRes { id, quantity, args } => {
                let args = with_quantity_default(args, *quantity);
                let resolved = resolve_arguments(&args, table).await?;
                resolve_plain_args(id, Some(*quantity), resolved, table).await
            }
            UIText::ResAnnotated {
                id,
                args,
                base_annotations,
            } => resolve_annotated(id, None, args, base_annotations, table).await,
            UIText::PluralResAnnotated {
                id,
                quantity,
                args,
                base_annotations,
            } => {
                let args = with_quantity_default_annotated(args, *quantity);
                resolve_annotated(id, Some(*quantity), &args, base_annotations, table).await
            }
            UIText::Compound(children) => {
                let mut parts =
                    try_join_all(children.iter().map(|child| resolve_node(child, table))).await?;
                Ok(match parts.len() {
                    0 => StyledText::empty(),
                    1 => parts.swap_remove(0),
                    _ => StyledText::concat(parts),
                })
            }
        }
    }
    .boxed()
}

fn resolve_argument<'a, T: StringTable>(
    arg: &'a Argument,
    table: &'a T,
) -> BoxFuture<'a, Result<StyledText, ResolveError>> {
    match arg {
        Argument::Text(text) => future::ready(Ok(StyledText::plain(text.as_str()))).boxed(),
        Argument::Node(node) => resolve_node(node, table),
    }
}

async fn resolve_arguments<T: StringTable>(
    args: &[Argument],
    table: &T,
) -> Result<Vec<StyledText>, ResolveError> {
    try_join_all(args.iter().map(|arg| resolve_argument(arg, table))).await
}

/// `Res` and `PluralRes`: plain substitution unless an argument is styled.
async fn resolve_plain_args<T: StringTable>(
    id: &ResourceId,
    quantity: Option<i64>,
    resolved: Vec<StyledText>,
    table: &T,
) -> Result<StyledText, ResolveError> {
    if resolved.iter().any(StyledText::is_styled) {
        trace!(resource = %id, args = resolved.len(), "styled argument, substituting markers");
        let format = fetch(table, id, quantity, &markers(resolved.len())).await?;
        let args: Vec<ResolvedArgument<'static>> =
            resolved.into_iter().map(ResolvedArgument::plain).collect();
        Ok(substitute(id, &format, &args, &[]))
    } else {
        trace!(resource = %id, args = resolved.len(), "plain substitution");
        let plain: Vec<String> = resolved.into_iter().map(StyledText::into_string).collect();
        Ok(StyledText::plain(fetch(table, id, quantity, &plain).await?))
    }
}

/// `ResAnnotated` and `PluralResAnnotated`: always through the markers.
async fn resolve_annotated<T: StringTable>(
    id: &ResourceId,
    quantity: Option<i64>,
    args: &[AnnotatedArgument],
    base_annotations: &[Annotation],
    table: &T,
) -> Result<StyledText, ResolveError> {
    let values = try_join_all(args.iter().map(|arg| resolve_argument(&arg.value, table))).await?;
    trace!(resource = %id, args = args.len(), "annotated substitution");
    let format = fetch(table, id, quantity, &markers(args.len())).await?;
    let resolved: Vec<ResolvedArgument<'_>> = values
        .into_iter()
        .zip(args)
        .map(|(value, arg)| ResolvedArgument {
            value,
            annotations: &arg.annotations,
        })
        .collect();
    Ok(substitute(id, &format, &resolved, base_annotations))
}

async fn fetch<T: StringTable>(
    table: &T,
    id: &ResourceId,
    quantity: Option<i64>,
    args: &[String],
) -> Result<String, ResolveError> {
    match quantity {
        Some(quantity) => table.get_plural(id, quantity, args).await,
        None => table.get(id, args).await,
    }
}

/// Plural nodes declared without arguments take their quantity as the sole
/// argument.
fn with_quantity_default(args: &[Argument], quantity: i64) -> Cow<'_, [Argument]> {
    if args.is_empty() {
        Cow::Owned(vec![Argument::from(quantity)])
    } else {
        Cow::Borrowed(args)
    }
}

fn with_quantity_default_annotated(
    args: &[AnnotatedArgument],
    quantity: i64,
) -> Cow<'_, [AnnotatedArgument]> {
    if args.is_empty() {
        Cow::Owned(vec![AnnotatedArgument::from(Argument::from(quantity))])
    } else {
        Cow::Borrowed(args)
    }
}
