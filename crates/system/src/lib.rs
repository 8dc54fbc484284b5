#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! # Ferrule System
//!
//! Filesystem helpers for Ferrule.
//!
//! Currently this is the single-level [`DirectoryVisitor`], which classifies
//! each entry of a directory and calls the handler registered for its type.
//!
//! ## Example
//!
//! ```no_run
//! use ferrule_system::prelude::*;
//!
//! fn main() -> SystemResult<()> {
//!     let mut names = Vec::new();
//!     DirectoryVisitor::new()
//!         .on_dir(|path| {
//!             names.push(path.display().to_string());
//!             Ok::<_, std::io::Error>(())
//!         })
//!         .visit(".")?;
//!
//!     println!("subdirectories: {names:?}");
//!     Ok(())
//! }
//! ```

mod error;
mod visitor;

pub use error::{BoxError, SystemError, SystemResult};
pub use visitor::{DirectoryVisitor, VisitSummary};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{DirectoryVisitor, SystemError, SystemResult, VisitSummary};
}
