mod annotation;
mod resource_id;
mod style;
mod styled_text;

pub use annotation::{Annotation, LinkAnnotation, LinkTarget};
pub use resource_id::ResourceId;
pub use style::{Color, FontStyle, FontWeight, ParagraphStyle, SpanStyle, TextAlign, TextDecoration};
pub use styled_text::{Scope, StyledRun, StyledText, StyledTextBuilder};
