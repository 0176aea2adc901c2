//! The `UIText` tree, its arguments, and the builder DSL.

mod argument;
pub mod builder;
mod ui_text;

pub use argument::{AnnotatedArgument, Argument};
pub use builder::{
    AnnotationsBuilder, ResAnnotatedBuilder, ResBuilder, UITextBuilder, build_ui_text,
};
pub use ui_text::UIText;
