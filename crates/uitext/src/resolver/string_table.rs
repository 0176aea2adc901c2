//! The string-table collaborator consumed by resolution.

use std::future::Future;
use std::sync::Arc;

use crate::resolver::ResolveError;
use crate::types::ResourceId;

/// A source of localized format strings.
///
/// Implementations look a resource up in the current language and substitute
/// `args` positionally (`%s` in sequence, `%N$s` explicitly). Arguments are
/// always pre-stringified text; no numeric formatting is performed.
///
/// Lookups may be asynchronous (tables loaded on demand, remote catalogs).
/// Resolution awaits them cooperatively and drops in-flight lookups when the
/// resolution itself is dropped.
///
/// Resolution relies on the table substituting argument text verbatim: when
/// arguments carry styling it passes `${0}`, `${1}`, ... markers as arguments
/// and splits the result back apart.
pub trait StringTable: Send + Sync {
    /// Look up the string resource `id` and substitute `args`.
    fn get(
        &self,
        id: &ResourceId,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send;

    /// Look up the plural resource `id`, select the form for `quantity`
    /// using the current language's plural rules, and substitute `args`.
    fn get_plural(
        &self,
        id: &ResourceId,
        quantity: i64,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

impl<T: StringTable> StringTable for Arc<T> {
    fn get(
        &self,
        id: &ResourceId,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).get(id, args)
    }

    fn get_plural(
        &self,
        id: &ResourceId,
        quantity: i64,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).get_plural(id, quantity, args)
    }
}

impl<T: StringTable> StringTable for &T {
    fn get(
        &self,
        id: &ResourceId,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).get(id, args)
    }

    fn get_plural(
        &self,
        id: &ResourceId,
        quantity: i64,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).get_plural(id, quantity, args)
    }
}
