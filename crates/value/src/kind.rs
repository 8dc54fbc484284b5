//! Value kinds
//!
//! [`ValueKind`] is a lightweight classification of a [`Value`], used in
//! conversion errors and log fields.
//!
//! [`Value`]: crate::Value

use core::fmt::{self, Display, Formatter};

/// Represents the kind of a [`Value`](crate::Value)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// Explicit null
    Null,
    /// Boolean value
    Boolean,
    /// Integer number
    Integer,
    /// Floating point number
    Float,
    /// UTF-8 text
    Text,
    /// Ordered sequence of values
    Array,
    /// Key-value map
    Object,
    /// Caller-supplied container or opaque object
    Custom,
}

impl ValueKind {
    /// Lowercase name of this kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Array => "array",
            Self::Object => "object",
            Self::Custom => "custom",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
