//! Dynamic value type
//!
//! [`Value`] represents one datum of loosely structured data. Every API
//! that can come back empty-handed returns `Option<Value>`, so `0`, `false`
//! and `""` stay distinguishable from "nothing there".
//!
//! Decoded payloads often hold explicit nulls (`{"a": null}`). Those are
//! stored as [`Value::Null`] so a present-but-null key stays distinct from a
//! missing one, and lookups report a null they land on as `None`.

use core::fmt::{self, Display, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::access::Navigable;
use crate::key::Key;
use crate::kind::ValueKind;

/// Insertion-ordered key-value map
pub type Object = IndexMap<Key, Value>;

/// Any present value flowing through the navigation functions
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicit null stored in a container
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// UTF-8 text
    Text(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Key-value map
    Object(Object),

    /// Caller-supplied container or opaque object.
    ///
    /// Its capabilities come from its [`Navigable`] implementation; an
    /// implementation exposing none of them behaves as an opaque scalar.
    Custom(Arc<dyn Navigable>),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create an array from anything convertible into values
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Create an object from `(key, value)` pairs
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create an empty array value
    pub fn array_empty() -> Self {
        Self::Array(Vec::new())
    }

    /// Create an empty object value
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    /// Wrap a caller-supplied container
    pub fn custom(v: impl Navigable + 'static) -> Self {
        Self::Custom(Arc::new(v))
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Custom(_) => ValueKind::Custom,
        }
    }

    /// Check if this is an explicit null
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as array slice
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Truthiness: null, zero, NaN, `false` and empty text/collections are
    /// falsy
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(t) => !t.is_empty(),
            Self::Array(a) => !a.is_empty(),
            Self::Object(o) => !o.is_empty(),
            Self::Custom(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ==================== Display ====================

/// Nested rendering: text is quoted inside collections
struct Nested<'a>(&'a Value);

impl Display for Nested<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Text(t) => write!(f, "{t:?}"),
            other => Display::fmt(other, f),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            // Debug keeps the fractional part: 3.0, not 3
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(t) => f.write_str(t),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Nested(item))?;
                }
                f.write_str("]")
            }
            Self::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {}", Nested(item))?;
                }
                f.write_str("}")
            }
            Self::Custom(inner) => write!(f, "<{inner:?}>"),
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::float(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Text(s) => Self::Text(s),
            Key::Integer(i) => Self::Integer(i),
        }
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<Arc<dyn Navigable>> for Value {
    fn from(v: Arc<dyn Navigable>) -> Self {
        Self::Custom(v)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::array(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;

    impl Navigable for Opaque {}

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::null().kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::from(42).kind(), ValueKind::Integer);
        assert_eq!(Value::from(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::array([1, 2]).kind(), ValueKind::Array);
        assert_eq!(Value::object([("a", 1)]).kind(), ValueKind::Object);
        assert_eq!(Value::custom(Opaque).kind(), ValueKind::Custom);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::integer(42), Value::integer(42));
        assert_ne!(Value::integer(1), Value::float(1.0));
        assert_ne!(Value::text("1"), Value::integer(1));
        assert_eq!(Value::null(), Value::Null);
        assert_ne!(Value::null(), Value::boolean(false));
    }

    #[test]
    fn test_option_converts_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::integer(3));
        assert_eq!(
            Value::object([("a", None::<&str>)]),
            Value::object([("a", Value::Null)])
        );
        assert!(Value::from(None::<i64>).is_null());
        assert!(!Value::integer(0).is_null());
    }

    #[test]
    fn test_custom_equality_is_identity() {
        let a = Value::custom(Opaque);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Value::custom(Opaque));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::integer(42).to_string(), "42");
        assert_eq!(Value::float(3.0).to_string(), "3.0");
        assert_eq!(Value::text("hello").to_string(), "hello");
        assert_eq!(Value::array([Value::from(1), Value::from("a")]).to_string(), "[1, \"a\"]");
        assert_eq!(
            Value::object([(Key::from("a"), Value::from(1)), (Key::from(2), Value::from("b"))])
                .to_string(),
            "{\"a\": 1, 2: \"b\"}"
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::null().is_truthy());
        assert!(!Value::integer(0).is_truthy());
        assert!(!Value::float(f64::NAN).is_truthy());
        assert!(!Value::text("").is_truthy());
        assert!(!Value::array_empty().is_truthy());
        assert!(Value::text("x").is_truthy());
        assert!(Value::custom(Opaque).is_truthy());
    }
}
