//! Level-based record filters
//!
//! A [`RecordFilter`] decides per record whether it passes, by level alone.
//! It plugs into a subscriber as a per-layer filter:
//!
//! ```
//! use ferrule_log::{Level, RecordFilter};
//! use tracing_subscriber::{Layer, Registry, layer::SubscriberExt};
//!
//! let only_problems = RecordFilter::range(Level::Warn, Level::Error);
//! let subscriber = Registry::default()
//!     .with(tracing_subscriber::fmt::layer().with_filter(only_problems));
//! # drop(subscriber);
//! ```

use std::fmt;

use tracing::Metadata;
use tracing_subscriber::layer::{Context, Filter};

use crate::config::Level;

/// Record filter over severity levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Records at exactly `level`
    Exact {
        /// Accepted level
        level: Level,
        /// Filter name
        name: String,
    },
    /// Records with `low <= level <= high`
    Range {
        /// Least severe accepted level
        low: Level,
        /// Most severe accepted level
        high: Level,
        /// Filter name
        name: String,
    },
    /// Records accepted by at least one member
    Any {
        /// Member filters
        filters: Vec<RecordFilter>,
        /// Filter name
        name: String,
    },
}

impl RecordFilter {
    /// Accept exactly one level. Named `LevelFilter-<LEVEL>`.
    pub fn exact(level: Level) -> Self {
        Self::Exact {
            level,
            name: format!("LevelFilter-{level}"),
        }
    }

    /// Accept an inclusive level range; the bounds may be given in either order.
    /// Named `RangeFilter-<LOW>-<HIGH>`.
    pub fn range(a: Level, b: Level) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self::Range {
            low,
            high,
            name: format!("RangeFilter-{low}-{high}"),
        }
    }

    /// Accept whatever any member accepts; with no members nothing passes.
    /// Named `AnyFilter-(<member>, ...)`, skipping members with empty names.
    pub fn any(filters: impl IntoIterator<Item = RecordFilter>) -> Self {
        let filters: Vec<_> = filters.into_iter().collect();
        let members = filters
            .iter()
            .map(Self::name)
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self::Any {
            filters,
            name: format!("AnyFilter-({members})"),
        }
    }

    /// Replace the generated name
    #[must_use]
    pub fn named(mut self, new_name: impl Into<String>) -> Self {
        match &mut self {
            Self::Exact { name, .. } | Self::Range { name, .. } | Self::Any { name, .. } => {
                *name = new_name.into();
            }
        }
        self
    }

    /// Filter name
    pub fn name(&self) -> &str {
        match self {
            Self::Exact { name, .. } | Self::Range { name, .. } | Self::Any { name, .. } => name,
        }
    }

    /// Whether a record at `level` passes
    pub fn matches(&self, level: &Level) -> bool {
        match self {
            Self::Exact { level: accepted, .. } => level == accepted,
            Self::Range { low, high, .. } => low <= level && level <= high,
            Self::Any { filters, .. } => filters.iter().any(|f| f.matches(level)),
        }
    }
}

impl fmt::Display for RecordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<S> Filter<S> for RecordFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.matches(&Level::from(meta.level()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_match() {
        assert!(RecordFilter::exact(Level::Info).matches(&Level::Info));
        assert!(!RecordFilter::exact(Level::Warn).matches(&Level::Info));
    }

    #[test]
    fn test_range_normalizes_bounds() {
        let filter = RecordFilter::range(Level::Warn, Level::Debug);
        assert_eq!(
            filter,
            RecordFilter::Range {
                low: Level::Debug,
                high: Level::Warn,
                name: "RangeFilter-DEBUG-WARN".to_string(),
            }
        );
    }

    #[test]
    fn test_generated_names() {
        assert_eq!(RecordFilter::exact(Level::Info).name(), "LevelFilter-INFO");
        assert_eq!(
            RecordFilter::any([
                RecordFilter::exact(Level::Debug),
                RecordFilter::exact(Level::Info)
            ])
            .name(),
            "AnyFilter-(LevelFilter-DEBUG, LevelFilter-INFO)"
        );
        assert_eq!(RecordFilter::any([]).name(), "AnyFilter-()");
    }

    #[test]
    fn test_any_skips_unnamed_members_in_name() {
        let filter = RecordFilter::any([
            RecordFilter::exact(Level::Error).named(""),
            RecordFilter::exact(Level::Trace),
        ]);
        assert_eq!(filter.name(), "AnyFilter-(LevelFilter-TRACE)");
        assert!(filter.matches(&Level::Error));
    }

    #[test]
    fn test_named_overrides() {
        let filter = RecordFilter::range(Level::Info, Level::Error).named("problems");
        assert_eq!(filter.to_string(), "problems");
    }
}
