//! Error types for value navigation
//!
//! The navigation functions separate two families of failure:
//!
//! - **Recognized** failures (`AccessError::{UnsupportedKey, MissingKey,
//!   OutOfRange, Unsupported}`, `CastError::{Conversion, Incompatible}`) are
//!   the shape-and-absence conditions the functions exist to absorb. They
//!   never reach the caller; the caller's default is returned instead.
//! - A [`Fault`] is anything else a caller-supplied capability reports. It is
//!   propagated unmodified.

use std::error::Error as StdError;

use thiserror::Error;

use crate::key::Key;
use crate::kind::ValueKind;

/// Boxed error type carried by a [`Fault`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Unrecognized failure raised by caller-supplied container or conversion
/// logic.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Fault(#[source] BoxError);

impl Fault {
    /// Wrap an arbitrary error
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self(error.into())
    }

    /// Create a fault from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }

    /// Borrow the wrapped error
    #[must_use]
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Unwrap into the boxed error
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

/// Result of a single-step lookup performed by a capability
pub type AccessResult<T> = Result<T, AccessError>;

/// Lookup failure reported by a [`MapAccess`](crate::MapAccess) or
/// [`SequenceAccess`](crate::SequenceAccess) implementation
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// The container cannot be addressed with this kind of key
    #[error("cannot address {container} with {} key {key}", .key.type_name())]
    UnsupportedKey {
        /// Offending key
        key: Key,
        /// Container description
        container: &'static str,
    },

    /// Key not present
    #[error("key {0} not found")]
    MissingKey(Key),

    /// Position outside `0 .. len`
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested position
        index: i64,
        /// Container length
        len: usize,
    },

    /// The container does not support this operation at all
    #[error("{0} does not support keyed access")]
    Unsupported(&'static str),

    /// Anything else; never suppressed
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl AccessError {
    /// Shorthand for [`AccessError::UnsupportedKey`]
    pub fn unsupported_key(key: &Key, container: &'static str) -> Self {
        Self::UnsupportedKey {
            key: key.clone(),
            container,
        }
    }

    /// Shorthand for a fault built from a message
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(Fault::msg(message))
    }

    /// Whether this failure is a shape or absence condition that resolves
    /// to the caller's default
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Fault(_))
    }

    /// Split into the recognized failure or the fault to propagate
    pub(crate) fn into_fault(self) -> Result<Self, Fault> {
        match self {
            Self::Fault(fault) => Err(fault),
            recognized => Ok(recognized),
        }
    }
}

/// Conversion failure reported by a [`FromValue`](crate::FromValue)
/// implementation
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CastError {
    /// The value has an acceptable kind but unusable content (`"abc"` as an
    /// integer, an infinite float as an integer)
    #[error("cannot convert {from} to {to}: {reason}")]
    Conversion {
        /// Source kind
        from: ValueKind,
        /// Target type name
        to: &'static str,
        /// Detail
        reason: String,
    },

    /// The source kind cannot be converted to the target type at all
    #[error("{from} is incompatible with {to}")]
    Incompatible {
        /// Source kind
        from: ValueKind,
        /// Target type name
        to: &'static str,
    },

    /// Anything else; never suppressed
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl CastError {
    /// Shorthand for [`CastError::Conversion`]
    pub fn conversion(from: ValueKind, to: &'static str, reason: impl Into<String>) -> Self {
        Self::Conversion {
            from,
            to,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CastError::Incompatible`]
    pub const fn incompatible(from: ValueKind, to: &'static str) -> Self {
        Self::Incompatible { from, to }
    }

    /// Whether this failure resolves to the caller's default
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Fault(_))
    }
}

/// Path parsing failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Bracket segment is not an integer
    #[error("invalid index '{index}' in path '{path}'")]
    InvalidIndex {
        /// Full path text
        path: String,
        /// Bracket content
        index: String,
    },

    /// `[` without a matching `]`
    #[error("unclosed '[' in path '{0}'")]
    Unclosed(String),

    /// Too many segments or an oversized index
    #[error("{what} limit exceeded: {actual} > {limit}")]
    LimitExceeded {
        /// What was limited
        what: &'static str,
        /// Configured limit
        limit: usize,
        /// Observed size
        actual: usize,
    },
}

/// Umbrella error for operations that both parse and navigate
#[derive(Debug, Error)]
pub enum ValueError {
    /// Malformed path text
    #[error(transparent)]
    Path(#[from] PathError),

    /// Fault raised while navigating
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// Result type for value operations
pub type ValueResult<T> = Result<T, ValueError>;
