//! Display configuration

use serde::{Deserialize, Serialize};

/// Display configuration
///
/// Independent toggles that map directly onto fmt layer options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: cfg!(feature = "ansi") && std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Apply `FERRULE_LOG_TIME`, `FERRULE_LOG_SOURCE` and `FERRULE_LOG_COLORS`
    pub(super) fn parse_env(&mut self) {
        self.apply(|name| std::env::var(name).ok());
    }

    pub(super) fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("FERRULE_LOG_TIME") {
            self.time = enabled(&v);
        }
        if let Some(v) = lookup("FERRULE_LOG_SOURCE") {
            self.source = enabled(&v);
        }
        if let Some(v) = lookup("FERRULE_LOG_COLORS") {
            self.colors = enabled(&v);
        }
    }
}

fn enabled(v: &str) -> bool {
    v != "0" && !v.eq_ignore_ascii_case("false")
}
