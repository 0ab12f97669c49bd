//! Submission transport port.
//!
//! Delivers a validated [`ContactSubmission`] somewhere. The controller calls
//! [`submit_contact_form`](SubmissionTransport::submit_contact_form) exactly
//! once per valid submission and never retries.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FormConfig;
use crate::error::TransportError;
use crate::form::ContactSubmission;

/// Delivery interface for contact submissions.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver one submission. Completes with `Ok(())` once it was accepted.
    async fn submit_contact_form(&self, submission: &ContactSubmission)
    -> Result<(), TransportError>;
}

/// Stand-in transport that waits a fixed delay and then answers.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    rejection: Option<String>,
}

impl SimulatedTransport {
    /// Accepts every submission after `delay`.
    pub fn succeeding(delay: Duration) -> Self {
        Self {
            delay,
            rejection: None,
        }
    }

    /// Rejects every submission after `delay`.
    pub fn rejecting(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            rejection: Some(reason.into()),
        }
    }

    /// Succeeding transport using [`FormConfig::simulated_delay`].
    pub fn from_config(config: &FormConfig) -> Self {
        Self::succeeding(config.simulated_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit_contact_form(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), TransportError> {
        tracing::debug!(
            email = %submission.email,
            delay = ?self.delay,
            "simulating contact form delivery"
        );
        tokio::time::sleep(self.delay).await;

        match &self.rejection {
            None => {
                tracing::info!(email = %submission.email, "contact form delivered");
                Ok(())
            }
            Some(reason) => Err(TransportError::rejected(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ana Silva".into(),
            email: "ana@x.com".into(),
            phone: "(11) 91234-5678".into(),
            message: "Preciso de ajuda urgente".into(),
            privacy_accepted: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeding_waits_the_delay() {
        let transport = SimulatedTransport::succeeding(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        transport.submit_contact_form(&submission()).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejecting() {
        let transport = SimulatedTransport::rejecting(Duration::ZERO, "caixa cheia");
        let err = transport
            .submit_contact_form(&submission())
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::rejected("caixa cheia"));
    }

    #[test]
    fn test_from_config() {
        let config = FormConfig::default().with_simulated_delay(Duration::from_millis(10));
        assert_eq!(
            SimulatedTransport::from_config(&config).delay(),
            Duration::from_millis(10)
        );
    }
}
