//! Error types for the submission pipeline.
//!
//! Validation failures are not errors here: they are per-field
//! [`ValidationResult`](contact_validator::ValidationResult)s that never leave
//! the field they belong to. The only error that ends a submission attempt is
//! a [`TransportError`].

use std::time::Duration;

/// Failure to deliver a submission.
///
/// Terminal for the attempt: the controller reports it and restores the idle
/// state, keeping the user's input so they can resubmit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The receiving side refused the submission.
    #[error("submission rejected: {reason}")]
    Rejected {
        /// Why it was refused.
        reason: String,
    },

    /// No answer within the configured bound.
    #[error("transport timed out after {duration:?}")]
    Timeout {
        /// How long was waited before giving up.
        duration: Duration,
    },
}

impl TransportError {
    /// Convenience constructor for [`TransportError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TransportError::rejected("spam").to_string(),
            "submission rejected: spam"
        );
        assert_eq!(
            TransportError::Timeout {
                duration: Duration::from_secs(30)
            }
            .to_string(),
            "transport timed out after 30s"
        );
    }
}
