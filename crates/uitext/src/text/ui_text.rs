use serde::{Deserialize, Serialize};

use super::{AnnotatedArgument, Argument};
use crate::resolver::{ResolveError, StringTable, resolve_node};
use crate::types::{Annotation, ResourceId, StyledText};

/// A lazily resolved, localized and possibly styled piece of user-facing text.
///
/// A `UIText` is an immutable description: it names string resources and
/// arguments but holds no localized text until it is resolved against a
/// [`StringTable`]. The same tree can be resolved any number of times, for
/// example once per language change.
///
/// # Example
///
/// ```
/// use futures::executor::block_on;
/// use uitext::{Catalog, ResourceId, UIText};
///
/// const GREETING: ResourceId = ResourceId::from_name("greeting");
///
/// let mut catalog = Catalog::new();
/// catalog.insert_string("en", "greeting", "Hello, %s!").unwrap();
///
/// let text = UIText::res_with(GREETING, ["Radu"]);
/// assert_eq!(block_on(text.resolve_string(&catalog)).unwrap(), "Hello, Radu!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UIText {
    /// Literal text, used verbatim.
    Raw(String),

    /// A string resource with positional arguments.
    Res {
        id: ResourceId,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<Argument>,
    },

    /// A plural resource; the form is selected by `quantity`.
    ///
    /// Without explicit arguments the quantity itself is the sole argument.
    PluralRes {
        id: ResourceId,
        quantity: i64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<Argument>,
    },

    /// A string resource whose arguments carry their own annotations, with
    /// `base_annotations` wrapped around the whole result.
    ResAnnotated {
        id: ResourceId,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<AnnotatedArgument>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        base_annotations: Vec<Annotation>,
    },

    /// The plural counterpart of [`UIText::ResAnnotated`].
    PluralResAnnotated {
        id: ResourceId,
        quantity: i64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<AnnotatedArgument>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        base_annotations: Vec<Annotation>,
    },

    /// Concatenation of the children, each keeping its own styling.
    Compound(Vec<UIText>),
}

impl UIText {
    pub fn raw(text: impl Into<String>) -> Self {
        UIText::Raw(text.into())
    }

    /// A string resource without arguments.
    pub fn res(id: impl Into<ResourceId>) -> Self {
        UIText::Res {
            id: id.into(),
            args: Vec::new(),
        }
    }

    pub fn res_with<A: Into<Argument>>(
        id: impl Into<ResourceId>,
        args: impl IntoIterator<Item = A>,
    ) -> Self {
        UIText::Res {
            id: id.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// A plural resource whose only argument is `quantity`.
    pub fn plural_res(id: impl Into<ResourceId>, quantity: i64) -> Self {
        UIText::PluralRes {
            id: id.into(),
            quantity,
            args: Vec::new(),
        }
    }

    pub fn plural_res_with<A: Into<Argument>>(
        id: impl Into<ResourceId>,
        quantity: i64,
        args: impl IntoIterator<Item = A>,
    ) -> Self {
        UIText::PluralRes {
            id: id.into(),
            quantity,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn res_annotated(
        id: impl Into<ResourceId>,
        args: impl IntoIterator<Item = AnnotatedArgument>,
        base_annotations: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        UIText::ResAnnotated {
            id: id.into(),
            args: args.into_iter().collect(),
            base_annotations: base_annotations.into_iter().collect(),
        }
    }

    pub fn plural_res_annotated(
        id: impl Into<ResourceId>,
        quantity: i64,
        args: impl IntoIterator<Item = AnnotatedArgument>,
        base_annotations: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        UIText::PluralResAnnotated {
            id: id.into(),
            quantity,
            args: args.into_iter().collect(),
            base_annotations: base_annotations.into_iter().collect(),
        }
    }

    pub fn compound(components: impl IntoIterator<Item = UIText>) -> Self {
        UIText::Compound(components.into_iter().collect())
    }

    /// Resolve this tree into styled text.
    ///
    /// Arguments of a node and children of a compound are resolved
    /// concurrently and reassembled in declaration order. Dropping the
    /// returned future cancels any lookup still in flight; the result is
    /// either the complete text or an error, never a partial value.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `table`, such as
    /// [`ResolveError::ResourceNotFound`].
    ///
    /// # Panics
    ///
    /// Panics if a localized string references a placeholder index beyond
    /// the arguments declared on its node.
    pub async fn resolve<T: StringTable>(&self, table: &T) -> Result<StyledText, ResolveError> {
        resolve_node(self, table).await
    }

    /// Resolve this tree and drop all styling.
    pub async fn resolve_string<T: StringTable>(&self, table: &T) -> Result<String, ResolveError> {
        self.resolve(table).await.map(StyledText::into_string)
    }
}

impl Default for UIText {
    fn default() -> Self {
        UIText::Raw(String::new())
    }
}

impl From<&str> for UIText {
    fn from(text: &str) -> Self {
        UIText::Raw(text.to_string())
    }
}

impl From<String> for UIText {
    fn from(text: String) -> Self {
        UIText::Raw(text)
    }
}
