//! Logger builder implementation
//!
//! This module is organized into:
//! - `reload`: Runtime filter reload logic
//!
//! Format layers come from the macros in `crate::format`.

mod reload;

pub use reload::ReloadHandle;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};
use crate::filter::RecordFilter;
use crate::format::{create_fmt_layer, create_json_layer, make_writer};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
    record_filter: Option<RecordFilter>,
}

/// Guard that keeps the logger alive
///
/// Holds the reload handle when the configuration asked for one.
#[derive(Debug)]
pub struct LoggerGuard {
    reload_handle: Option<ReloadHandle>,
}

/// Install the registry with the filter layer and one fmt layer, optionally
/// restricting the fmt layer with a [`RecordFilter`].
macro_rules! init_subscriber {
    ($filter_layer:expr, $fmt_layer:expr, $record_filter:expr) => {{
        let registry = Registry::default().with($filter_layer);
        let fmt_layer = $fmt_layer;
        let installed = match $record_filter {
            Some(record_filter) => registry
                .with(fmt_layer.with_filter(record_filter))
                .try_init(),
            None => registry.with(fmt_layer).try_init(),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            record_filter: None,
        }
    }

    /// Only write records accepted by `filter`
    ///
    /// The env filter still applies first; `filter` narrows the output
    /// further, e.g. to an exact level or a level range.
    #[must_use]
    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.record_filter = Some(filter);
        self
    }

    /// Build and initialize the logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let Self {
            config,
            record_filter,
        } = self;

        let filter =
            EnvFilter::try_new(&config.level).map_err(|e| LogError::filter(&config.level, e))?;

        let (filter_layer, reload_handle) =
            reload::create_filter_layer(filter, &config.level, config.reloadable);

        let writer = make_writer(config.writer);
        let display = &config.display;

        match config.format {
            Format::Pretty => {
                let fmt_layer = create_fmt_layer!(pretty, display, writer);
                init_subscriber!(filter_layer, fmt_layer, record_filter);
            }
            Format::Compact => {
                let fmt_layer = create_fmt_layer!(compact, display, writer);
                init_subscriber!(filter_layer, fmt_layer, record_filter);
            }
            Format::Json => {
                let fmt_layer = create_json_layer!(display, writer);
                init_subscriber!(filter_layer, fmt_layer, record_filter);
            }
        }

        tracing::debug!(
            level = %config.level,
            format = ?config.format,
            reloadable = config.reloadable,
            "logger initialized"
        );

        Ok(LoggerGuard { reload_handle })
    }
}

impl LoggerGuard {
    /// Runtime filter handle, present when the config was `reloadable`
    pub fn reload_handle(&self) -> Option<&ReloadHandle> {
        self.reload_handle.as_ref()
    }

    #[cfg(test)]
    pub(crate) const fn noop() -> Self {
        Self {
            reload_handle: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_is_rejected_before_install() {
        let config = Config {
            level: "foo=loud".to_string(),
            ..Config::test()
        };
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Filter(_)));
    }
}
