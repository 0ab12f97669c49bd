//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization.
///
/// Hold it for the lifetime of the program; it records the filter the
/// subscriber was installed with.
#[derive(Debug)]
#[must_use = "dropping the guard immediately is almost always a mistake"]
pub struct LoggerGuard {
    filter: Option<String>,
}

impl LoggerGuard {
    /// Guard for a process where another subscriber was already installed.
    pub(crate) fn noop() -> Self {
        Self { filter: None }
    }

    /// Filter the subscriber was installed with, `None` for a no-op guard.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Override the level filter.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Override the output format.
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Configuration the logger will be built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the level filter without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the filter string cannot be parsed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::filter(&self.config.level, e))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display),
            Format::Compact => fmt_layer!(tracing_subscriber::fmt::layer().compact(), display),
            Format::Json => fmt_layer!(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten),
                display
            ),
        };

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            filter = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            filter: Some(self.config.level),
        })
    }
}
