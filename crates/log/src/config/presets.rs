//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Filter variable checked first.
pub const ENV_FILTER: &str = "CONTACT_LOG";
/// Fallback filter variable.
pub const RUST_LOG: &str = "RUST_LOG";
/// Format variable (`pretty`, `compact`, `json`).
pub const ENV_FORMAT: &str = "CONTACT_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_FILTER).or_else(|| lookup(RUST_LOG)) {
            config.level = level;
        }

        // An unrecognised format keeps the default rather than failing startup.
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_env(&lookup);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Test configuration (no colors, no timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_env_is_default() {
        assert_eq!(Config::from_lookup(env(&[])), Config::default());
    }

    #[test]
    fn test_contact_log_wins_over_rust_log() {
        let config = Config::from_lookup(env(&[(ENV_FILTER, "debug"), (RUST_LOG, "warn")]));
        assert_eq!(config.level, "debug");

        let config = Config::from_lookup(env(&[(RUST_LOG, "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_format_and_display_from_env() {
        let config = Config::from_lookup(env(&[
            (ENV_FORMAT, "json"),
            ("CONTACT_LOG_TIME", "false"),
            ("CONTACT_LOG_COLORS", "1"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.time);
        assert!(config.display.colors);
    }

    #[test]
    fn test_unknown_format_falls_back_to_compact() {
        let config = Config::from_lookup(env(&[(ENV_FORMAT, "logfmt")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::development().level, "debug");
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
        assert!(!Config::test().display.time);
    }
}
