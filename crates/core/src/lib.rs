//! # Ferrule Core
//!
//! Building blocks shared by the ferrule crates.
//!
//! ## Key Components
//!
//! - **Singleton**: a `static`-friendly guard that keeps the first instance
//!   ever constructed and hands it out to every later caller
//!
//! ## Usage
//!
//! ```rust
//! use ferrule_core::Singleton;
//!
//! struct Registry {
//!     name: String,
//! }
//!
//! static REGISTRY: Singleton<Registry> = Singleton::new();
//!
//! let first = REGISTRY.get_or_init(|| Registry { name: "first".into() });
//! let second = REGISTRY.get_or_init(|| Registry { name: "second".into() });
//!
//! assert_eq!(second.name, "first");
//! assert!(std::ptr::eq(first, second));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod singleton;

// Re-export main types for convenience
pub use singleton::Singleton;
