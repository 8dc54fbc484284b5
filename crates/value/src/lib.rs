//! # Ferrule Value
//!
//! Safe navigation over loosely structured data: look things up, walk
//! nested paths and convert leaves without a cascade of checks. Every
//! operation treats an ordinary miss (absent key, bad index, wrong shape,
//! failed conversion) as "use the default" and only lets genuine faults
//! escape.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrule_value::prelude::*;
//!
//! fn main() -> ValueResult<()> {
//!     let config = Value::object([
//!         ("server", Value::object([("port", "8080")])),
//!         ("hosts", Value::array(["a.local", "b.local"])),
//!     ]);
//!
//!     let port = config
//!         .dig_path("server.port", None)?
//!         .map_or(Ok(None), |port| port.cast::<u32>(None))?;
//!     let fallback = Value::from("localhost");
//!     let host = config.dig(&path!["hosts", 5], Some(&fallback))?;
//!
//!     assert_eq!(coalesce!(port, Some(80)), Some(8080));
//!     assert_eq!(host, Some(fallback));
//!     Ok(())
//! }
//! ```
//!
//! ## Containers
//!
//! Lookups dispatch on capabilities rather than concrete types. Objects,
//! arrays and the std/indexmap maps keyed by [`Key`] work out of the box;
//! any other container implements [`Navigable`] and travels inside
//! [`Value::Custom`].

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod access;
mod cast;
mod coalesce;
mod dig;
mod error;
mod get;
mod key;
mod kind;
mod path;
mod value;

pub use access::{MapAccess, Navigable, SequenceAccess, Shape};
pub use cast::{FromValue, safe_cast};
pub use coalesce::coalesce;
pub use dig::{dig, dig_path};
pub use error::{
    AccessError, AccessResult, BoxError, CastError, Fault, PathError, ValueError, ValueResult,
};
pub use get::safe_get;
pub use key::Key;
pub use kind::ValueKind;
pub use path::{Path, PathLimits};
pub use value::{Object, Value};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Fault, FromValue, Key, Navigable, Object, Path, Value, ValueError, ValueResult, coalesce,
        dig, dig_path, path, safe_cast, safe_get,
    };
}
