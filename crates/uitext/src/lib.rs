pub mod catalog;
pub mod parser;
pub mod resolver;
pub mod text;
pub mod types;

pub use catalog::{
    Catalog, LanguageManager, LoadError, LoadWarning, PluralCategory, plural_category,
};
pub use resolver::{ResolveError, StringTable, compute_suggestions};
pub use text::{
    AnnotatedArgument, AnnotationsBuilder, Argument, ResAnnotatedBuilder, ResBuilder, UIText,
    UITextBuilder, build_ui_text,
};
pub use types::{
    Annotation, Color, FontStyle, FontWeight, LinkAnnotation, LinkTarget, ParagraphStyle,
    ResourceId, Scope, SpanStyle, StyledRun, StyledText, StyledTextBuilder, TextAlign,
    TextDecoration,
};

/// Creates a `Vec<Argument>` from values of mixed argument types.
///
/// Values are converted via `Into<Argument>`, so strings, integers, and
/// nested `UIText` values can be passed together.
///
/// # Example
///
/// ```
/// use uitext::{Argument, ResourceId, UIText, args};
///
/// let a = args!["Radu", 3, UIText::res(ResourceId::from_name("cart"))];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[1], Argument::Text("3".to_string()));
///
/// let text = UIText::res_with(ResourceId::from_name("greeting"), args!["Radu"]);
/// assert!(matches!(text, UIText::Res { .. }));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![
            $( ::std::convert::Into::<$crate::Argument>::into($value) ),+
        ]
    };
}
