use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// An opaque key identifying a localized string or plural resource.
///
/// `ResourceId` keeps the resource name for diagnostics and a 64-bit FNV-1a
/// hash of it for lookups. Equality and hashing only consider the hash, so an
/// id built at compile time and one built from a runtime string compare equal
/// when their names match.
///
/// # Example
///
/// ```
/// use uitext::ResourceId;
///
/// // Create at compile time
/// const GREETING: ResourceId = ResourceId::from_name("greeting");
///
/// // Create at runtime
/// let greeting = ResourceId::new(String::from("greeting"));
///
/// assert_eq!(GREETING, greeting);
/// assert_eq!(GREETING.name(), "greeting");
/// ```
#[derive(Clone, Debug)]
pub struct ResourceId {
    name: Cow<'static, str>,
    hash: u64,
}

impl ResourceId {
    /// Create a `ResourceId` from a static name at compile time.
    ///
    /// ```
    /// use uitext::ResourceId;
    ///
    /// const CART_STATUS: ResourceId = ResourceId::from_name("shopping_cart_status");
    /// ```
    pub const fn from_name(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            hash: fnv1a_hash_str_64(name),
        }
    }

    /// Create a `ResourceId` from a name only known at runtime.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let hash = fnv1a_hash_str_64(&name);
        Self {
            name: Cow::Owned(name),
            hash,
        }
    }

    /// The resource name this id was created from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.hash
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for ResourceId {}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

impl From<&'static str> for ResourceId {
    fn from(name: &'static str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ResourceId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
