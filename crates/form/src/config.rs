//! Submission timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the success panel stays up before the form comes back.
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_secs(5);
/// Latency of the simulated transport.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_secs(2);
/// Upper bound on a single transport call.
pub const DEFAULT_TRANSPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timing knobs of the submission pipeline.
///
/// Durations are written in humantime notation (`"5s"`, `"1m 30s"`).
///
/// ```
/// use contact_form::FormConfig;
///
/// let config: FormConfig = serde_json::from_str(r#"{ "success_display": "3s" }"#).unwrap();
/// assert_eq!(config.success_display, std::time::Duration::from_secs(3));
/// assert_eq!(config.simulated_delay, std::time::Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Bound on the transport call; `None` waits forever.
    #[serde(with = "humantime_serde")]
    pub transport_timeout: Option<Duration>,

    /// Display window of the success panel.
    #[serde(with = "humantime_serde")]
    pub success_display: Duration,

    /// Delay of [`SimulatedTransport`](crate::SimulatedTransport).
    #[serde(with = "humantime_serde")]
    pub simulated_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            transport_timeout: Some(DEFAULT_TRANSPORT_TIMEOUT),
            success_display: DEFAULT_SUCCESS_DISPLAY,
            simulated_delay: DEFAULT_SIMULATED_DELAY,
        }
    }
}

impl FormConfig {
    /// Sets the transport bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_transport_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.transport_timeout = timeout;
        self
    }

    /// Sets the success panel window.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_success_display(mut self, window: Duration) -> Self {
        self.success_display = window;
        self
    }

    /// Sets the simulated transport delay.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }
}
