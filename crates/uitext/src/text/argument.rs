use serde::{Deserialize, Serialize};

use super::UIText;
use crate::types::Annotation;

/// A positional argument of a resource lookup.
///
/// Arguments are either plain text or a nested [`UIText`], which is resolved
/// (keeping its styling) before being substituted.
///
/// # Example
///
/// ```
/// use uitext::{Argument, ResourceId, UIText};
///
/// let name: Argument = "Radu".into();
/// let count: Argument = 30.into();
/// let nested: Argument = UIText::res(ResourceId::from_name("cart")).into();
///
/// assert_eq!(name, Argument::Text("Radu".to_string()));
/// assert_eq!(count, Argument::Text("30".to_string()));
/// assert!(matches!(nested, Argument::Node(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    /// Pre-stringified text, substituted verbatim.
    Text(String),

    /// A nested text node, resolved recursively.
    Node(UIText),
}

impl Argument {
    /// Attaches `annotations` to this argument's rendered span.
    pub fn annotated(self, annotations: impl IntoIterator<Item = Annotation>) -> AnnotatedArgument {
        AnnotatedArgument {
            value: self,
            annotations: annotations.into_iter().collect(),
        }
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Text(s)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Text(s.to_string())
    }
}

impl From<UIText> for Argument {
    fn from(text: UIText) -> Self {
        Argument::Node(text)
    }
}

impl From<i32> for Argument {
    fn from(n: i32) -> Self {
        Argument::Text(n.to_string())
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Argument::Text(n.to_string())
    }
}

impl From<u32> for Argument {
    fn from(n: u32) -> Self {
        Argument::Text(n.to_string())
    }
}

impl From<u64> for Argument {
    fn from(n: u64) -> Self {
        Argument::Text(n.to_string())
    }
}

impl From<usize> for Argument {
    fn from(n: usize) -> Self {
        Argument::Text(n.to_string())
    }
}

/// An argument together with the annotations scoped to its rendered span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedArgument {
    pub value: Argument,
    /// Applied as nested scopes around the argument, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl AnnotatedArgument {
    /// An argument without annotations.
    pub fn new(value: impl Into<Argument>) -> Self {
        Self {
            value: value.into(),
            annotations: Vec::new(),
        }
    }
}

impl From<Argument> for AnnotatedArgument {
    fn from(value: Argument) -> Self {
        Self::new(value)
    }
}

impl From<UIText> for AnnotatedArgument {
    fn from(value: UIText) -> Self {
        Self::new(value)
    }
}

impl From<String> for AnnotatedArgument {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AnnotatedArgument {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
