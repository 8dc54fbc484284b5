//! Container capabilities
//!
//! A container is classified per call by what it can do, not by what it is:
//!
//! - **map-like**: [`Navigable::as_map`] yields a [`MapAccess`] whose
//!   `get_or` returns the entry for a key, or the supplied default;
//! - **sequence-like**: [`Navigable::as_sequence`] yields a
//!   [`SequenceAccess`] whose `subscript` addresses a position;
//! - **opaque**: neither.
//!
//! Built-in values, `Vec<Value>` and the std/indexmap maps keyed
//! by [`Key`] implement these traits. Text is sequence-like: position `i`
//! is its `i`-th character, as a one-character [`Value::Text`]. Caller-supplied containers implement
//! them directly and travel inside [`Value::Custom`].

use core::fmt::{self, Debug, Display, Formatter};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error::{AccessError, AccessResult};
use crate::key::Key;
use crate::value::Value;

/// Closed classification of a container's capabilities
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Exposes [`MapAccess`]
    Map,
    /// Exposes [`SequenceAccess`] only
    Sequence,
    /// Exposes neither
    Opaque,
}

impl Shape {
    /// Lowercase name, used in log fields
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Opaque => "opaque",
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map-like capability: "get value for key, else the default"
pub trait MapAccess {
    /// Look up `key`, returning `default` when it is absent.
    ///
    /// A recognized [`AccessError`] (wrong key type, for example) makes the
    /// caller try the sequence capability next; [`AccessError::Fault`] is
    /// propagated.
    fn get_or<'a>(
        &'a self,
        key: &Key,
        default: Option<&'a Value>,
    ) -> AccessResult<Option<Cow<'a, Value>>>;
}

/// Sequence-like (generic subscript) capability
pub trait SequenceAccess {
    /// Address the element at `key`.
    ///
    /// Out-of-range positions and unusable keys must be reported as
    /// recognized [`AccessError`]s.
    fn subscript(&self, key: &Key) -> AccessResult<Cow<'_, Value>>;
}

/// A value that may expose container capabilities
pub trait Navigable: Debug + Send + Sync {
    /// Map-like capability, if any
    fn as_map(&self) -> Option<&dyn MapAccess> {
        None
    }

    /// Sequence-like capability, if any
    fn as_sequence(&self) -> Option<&dyn SequenceAccess> {
        None
    }

    /// The container itself, when it already is a [`Value`]
    fn as_value(&self) -> Option<&Value> {
        None
    }

    /// Classification derived from the exposed capabilities
    fn shape(&self) -> Shape {
        if self.as_map().is_some() {
            Shape::Map
        } else if self.as_sequence().is_some() {
            Shape::Sequence
        } else {
            Shape::Opaque
        }
    }
}

// ==================== Built-in values ====================

impl Navigable for Value {
    fn as_value(&self) -> Option<&Value> {
        Some(self)
    }

    fn as_map(&self) -> Option<&dyn MapAccess> {
        match self {
            Self::Object(object) => Some(object),
            Self::Custom(inner) => inner.as_map(),
            _ => None,
        }
    }

    fn as_sequence(&self) -> Option<&dyn SequenceAccess> {
        match self {
            Self::Array(items) => Some(items),
            Self::Text(text) => Some(text),
            Self::Custom(inner) => inner.as_sequence(),
            _ => None,
        }
    }
}

// ==================== Sequences ====================

fn subscript_slice<'a>(items: &'a [Value], key: &Key) -> AccessResult<Cow<'a, Value>> {
    let index = key
        .as_integer()
        .ok_or_else(|| AccessError::unsupported_key(key, "sequence"))?;
    key.as_index()
        .and_then(|i| items.get(i))
        .map(Cow::Borrowed)
        .ok_or(AccessError::OutOfRange {
            index,
            len: items.len(),
        })
}

impl SequenceAccess for Vec<Value> {
    fn subscript(&self, key: &Key) -> AccessResult<Cow<'_, Value>> {
        subscript_slice(self, key)
    }
}

impl Navigable for Vec<Value> {
    fn as_sequence(&self) -> Option<&dyn SequenceAccess> {
        Some(self)
    }
}

impl SequenceAccess for String {
    fn subscript(&self, key: &Key) -> AccessResult<Cow<'_, Value>> {
        let index = key
            .as_integer()
            .ok_or_else(|| AccessError::unsupported_key(key, "text"))?;
        key.as_index()
            .and_then(|i| self.chars().nth(i))
            .map(|ch| Cow::Owned(Value::Text(ch.to_string())))
            .ok_or_else(|| AccessError::OutOfRange {
                index,
                len: self.chars().count(),
            })
    }
}

// ==================== Maps ====================

macro_rules! impl_map_access {
    ($($map:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> MapAccess for $map {
                fn get_or<'a>(
                    &'a self,
                    key: &Key,
                    default: Option<&'a Value>,
                ) -> AccessResult<Option<Cow<'a, Value>>> {
                    Ok(self.get(key).or(default).map(Cow::Borrowed))
                }
            }

            impl<$($generics)*> Navigable for $map {
                fn as_map(&self) -> Option<&dyn MapAccess> {
                    Some(self)
                }
            }
        )*
    };
}

impl_map_access! {
    IndexMap<Key, Value, S> => [S: BuildHasher + Send + Sync],
    HashMap<Key, Value, S> => [S: BuildHasher + Send + Sync],
    BTreeMap<Key, Value> => [],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;

    impl Navigable for Opaque {}

    #[test]
    fn test_value_shapes() {
        assert_eq!(Value::object([("a", 1)]).shape(), Shape::Map);
        assert_eq!(Value::array([1, 2]).shape(), Shape::Sequence);
        assert_eq!(Value::integer(1).shape(), Shape::Opaque);
        assert_eq!(Value::text("abc").shape(), Shape::Sequence);
        assert_eq!(Value::null().shape(), Shape::Opaque);
        assert_eq!(Value::custom(Opaque).shape(), Shape::Opaque);
    }

    #[test]
    fn test_subscript_bounds() {
        let items = vec![Value::from(10), Value::from(20)];
        assert_eq!(
            items.subscript(&Key::from(1)).ok().map(Cow::into_owned),
            Some(Value::from(20))
        );
        assert!(matches!(
            items.subscript(&Key::from(2)),
            Err(AccessError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            items.subscript(&Key::from(-1)),
            Err(AccessError::OutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            items.subscript(&Key::from("a")),
            Err(AccessError::UnsupportedKey { .. })
        ));
    }

    #[test]
    fn test_text_subscript_by_character() {
        let text = "héllo".to_string();
        assert_eq!(
            text.subscript(&Key::from(1)).ok().map(Cow::into_owned),
            Some(Value::from("é"))
        );
        assert!(matches!(
            text.subscript(&Key::from(5)),
            Err(AccessError::OutOfRange { index: 5, len: 5 })
        ));
        assert!(matches!(
            text.subscript(&Key::from(-1)),
            Err(AccessError::OutOfRange { index: -1, len: 5 })
        ));
        assert!(matches!(
            text.subscript(&Key::from("h")),
            Err(AccessError::UnsupportedKey { container: "text", .. })
        ));
    }

    #[test]
    fn test_std_maps_are_map_like() {
        let mut map = HashMap::new();
        map.insert(Key::from("a"), Value::from(1));
        assert_eq!(map.shape(), Shape::Map);

        let fallback = Value::from(0);
        let found = map
            .get_or(&Key::from("b"), Some(&fallback))
            .ok()
            .flatten()
            .map(Cow::into_owned);
        assert_eq!(found, Some(Value::from(0)));
    }
}
