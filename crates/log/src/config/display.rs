//! Display configuration

use serde::{Deserialize, Serialize};

/// Display configuration
///
/// Independent toggles that map directly onto config file keys.
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
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Apply `ROSTER_LOG_TIME`, `ROSTER_LOG_SOURCE` and `ROSTER_LOG_COLORS`
    pub(super) fn apply_vars(&mut self, var: &impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("ROSTER_LOG_TIME") {
            self.time = is_enabled(&v);
        }
        if let Some(v) = var("ROSTER_LOG_SOURCE") {
            self.source = is_enabled(&v);
        }
        if let Some(v) = var("ROSTER_LOG_COLORS") {
            self.colors = is_enabled(&v);
        }
    }
}

fn is_enabled(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}
