//! Display configuration

use serde::{Deserialize, Serialize};

/// Timestamp toggle variable.
pub const ENV_TIME: &str = "CONTACT_LOG_TIME";
/// Source location toggle variable.
pub const ENV_SOURCE: &str = "CONTACT_LOG_SOURCE";
/// ANSI color toggle variable.
pub const ENV_COLORS: &str = "CONTACT_LOG_COLORS";

/// What each log line carries.
///
/// Independent toggles that map one-to-one onto config keys, hence the bools.
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
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Apply [`ENV_TIME`], [`ENV_SOURCE`] and [`ENV_COLORS`] read through
    /// `lookup`. `0` and `false` turn a toggle off; any other value turns it on.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let flag = |value: String| value != "0" && !value.eq_ignore_ascii_case("false");

        if let Some(v) = lookup(ENV_TIME) {
            self.time = flag(v);
        }
        if let Some(v) = lookup(ENV_SOURCE) {
            self.source = flag(v);
        }
        if let Some(v) = lookup(ENV_COLORS) {
            self.colors = flag(v);
        }
    }
}
