//! Resolution of `UIText` trees into styled text.
//!
//! This module holds the string-table collaborator contract, the
//! placeholder-substitution engine that keeps per-argument styling, and the
//! asynchronous resolution algorithm itself.

mod error;
mod resolve;
mod string_table;
mod substitution;

pub use error::{ResolveError, compute_suggestions};
pub(crate) use resolve::resolve_node;
pub use string_table::StringTable;
pub use substitution::{ResolvedArgument, apply_annotations, substitute};
