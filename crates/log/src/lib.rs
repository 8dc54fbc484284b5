//! # Ferrule Log
//!
//! Zero-config logging on `tracing-subscriber`, plus level-based record
//! filters.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ferrule_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     // Auto-detect best configuration
//!     let _guard = ferrule_log::auto_init()?;
//!
//!     info!(port = 8080, "Server starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Filtering a layer by level
//!
//! ```rust,no_run
//! use ferrule_log::{Config, Level, LoggerBuilder, RecordFilter};
//!
//! // Only WARN and ERROR reach the output, whatever the env filter lets through
//! let _guard = LoggerBuilder::from_config(Config::from_env())
//!     .with_filter(RecordFilter::range(Level::Warn, Level::Error))
//!     .build()?;
//! # Ok::<(), ferrule_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;
mod filter;
mod format;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard, ReloadHandle};
pub use config::{Config, DisplayConfig, Format, Level, Writer};
pub use error::{LogError, LogResult};
pub use filter::RecordFilter;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Level, LogResult, RecordFilter, auto_init, debug, error, info, init, init_with, trace,
        warn,
    };

    pub use tracing::{Span, field};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

// Test initialization guard
#[cfg(test)]
static TEST_INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
///
/// `FERRULE_LOG` or `RUST_LOG` in the environment selects
/// [`Config::from_env`]; otherwise debug builds get
/// [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    #[cfg(test)]
    {
        TEST_INIT.get_or_init(|| ());
        if tracing::dispatcher::has_been_set() {
            return Ok(LoggerGuard::noop());
        }
    }

    if std::env::var("FERRULE_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests (captures logs)
#[cfg(test)]
pub fn init_test() -> LogResult<LoggerGuard> {
    TEST_INIT.get_or_init(|| ());
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    init_with(Config::test())
}
