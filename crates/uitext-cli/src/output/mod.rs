//! Output formatting for CLI commands.

pub mod ansi;
pub mod diagnostic;
pub mod table;

pub use ansi::render_ansi;
pub use diagnostic::{json_error_report, load_error_report};
