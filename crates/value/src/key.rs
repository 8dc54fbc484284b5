//! Lookup keys
//!
//! A [`Key`] addresses one step into a container: a text key into a map, or
//! an integer that a map can store as a key and a sequence can use as a
//! position.

use core::fmt::{self, Display, Formatter};

/// Lookup token for a single navigation step
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Text key (`user`, `name`, the empty string)
    Text(String),
    /// Integer key; doubles as a sequence position when non-negative
    Integer(i64),
}

impl Key {
    /// Integer content, if this is an integer key
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Text(_) => None,
        }
    }

    /// Sequence position for this key.
    ///
    /// Only non-negative integer keys are positions; text keys and negative
    /// integers return `None`.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        self.as_integer().and_then(|i| usize::try_from(i).ok())
    }

    /// Short name of the key's type, used in error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<&String> for Key {
    fn from(key: &String) -> Self {
        Self::Text(key.clone())
    }
}

impl From<char> for Key {
    fn from(key: char) -> Self {
        Self::Text(key.to_string())
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Self::Integer(key)
    }
}

impl From<i32> for Key {
    fn from(key: i32) -> Self {
        Self::Integer(i64::from(key))
    }
}

impl From<u32> for Key {
    fn from(key: u32) -> Self {
        Self::Integer(i64::from(key))
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_index() {
        assert_eq!(Key::from(2).as_index(), Some(2));
        assert_eq!(Key::from(-1).as_index(), None);
        assert_eq!(Key::from("2").as_index(), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from("name").to_string(), "\"name\"");
        assert_eq!(Key::from(7).to_string(), "7");
    }

    #[test]
    fn test_text_and_integer_keys_differ() {
        assert_ne!(Key::from("1"), Key::from(1));
    }
}
