//! Reload logic for runtime filter changes

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, Registry, layer::Layer};

use crate::error::{LogError, LogResult};

/// Handle for runtime filter changes
#[derive(Clone)]
pub struct ReloadHandle {
    filter: tracing_subscriber::reload::Handle<EnvFilter, Registry>,
    /// Current filter string, lock-free reads via ArcSwap
    current_filter: Arc<ArcSwap<String>>,
}

impl std::fmt::Debug for ReloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadHandle")
            .field("current_filter", &self.current_filter.load())
            .finish_non_exhaustive()
    }
}

impl ReloadHandle {
    /// Reload the log filter at runtime
    ///
    /// # Errors
    /// Returns error if filter parsing fails or the subscriber is gone
    pub fn reload(&self, filter: &str) -> LogResult<()> {
        let new_filter = EnvFilter::try_new(filter).map_err(|e| LogError::filter(filter, e))?;
        self.filter
            .reload(new_filter)
            .map_err(|e| LogError::Config(format!("failed to reload filter: {e}")))?;
        self.current_filter.store(Arc::new(filter.to_string()));
        Ok(())
    }

    /// Get the current filter string
    pub fn current_filter(&self) -> Arc<String> {
        self.current_filter.load_full()
    }
}

/// Boxed filter layer installed first on the registry
pub(super) type FilterLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a filter layer, optionally wrapping it in a reloadable layer
///
/// Returns:
/// - The filter layer (potentially wrapped in reload)
/// - Optional reload handle (if reloadable=true)
pub(super) fn create_filter_layer(
    filter: EnvFilter,
    directive: &str,
    reloadable: bool,
) -> (FilterLayer, Option<ReloadHandle>) {
    if reloadable {
        let (layer, handle) = tracing_subscriber::reload::Layer::new(filter);
        let reload_handle = ReloadHandle {
            filter: handle,
            current_filter: Arc::new(ArcSwap::from_pointee(directive.to_string())),
        };
        (Box::new(layer), Some(reload_handle))
    } else {
        (Box::new(filter), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_reload_updates_current_filter() {
        let filter = EnvFilter::try_new("info").unwrap();
        let (layer, handle) = create_filter_layer(filter, "info", true);
        let handle = handle.unwrap();
        let _subscriber = Registry::default().with(layer);

        assert_eq!(handle.current_filter().as_str(), "info");
        handle.reload("debug,ferrule_value=trace").unwrap();
        assert_eq!(handle.current_filter().as_str(), "debug,ferrule_value=trace");
    }

    #[test]
    fn test_reload_rejects_bad_directive() {
        let filter = EnvFilter::try_new("info").unwrap();
        let (layer, handle) = create_filter_layer(filter, "info", true);
        let handle = handle.unwrap();
        let _subscriber = Registry::default().with(layer);

        assert!(matches!(handle.reload("foo=loud"), Err(LogError::Filter(_))));
        assert_eq!(handle.current_filter().as_str(), "info");
    }

    #[test]
    fn test_static_filter_has_no_handle() {
        let filter = EnvFilter::try_new("warn").unwrap();
        let (_layer, handle) = create_filter_layer(filter, "warn", false);
        assert!(handle.is_none());
    }
}
