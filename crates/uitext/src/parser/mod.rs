//! Parsers for localized format strings.
//!
//! Two grammars live here: the Android-style format strings stored in string
//! tables (`%s`, `%1$s`, `%%`), and the synthetic `${N}` placeholder markers
//! the substitution engine splits resolved format strings on.

pub mod ast;
pub mod error;
mod format;
mod marker;

pub use ast::*;
pub use error::ParseError;
pub use format::parse_format;
pub use marker::{contains_marker, marker, markers, parse_markers};
