//! Error handling for contact-log

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The offending filter string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// Unknown output format name.
    #[error("unknown log format '{0}', expected pretty, compact or json")]
    UnknownFormat(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

impl LogError {
    pub(crate) fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = LogError::filter("debug,=x", "bad directive");
        assert_eq!(
            error.to_string(),
            "invalid filter 'debug,=x': bad directive"
        );

        let error = LogError::UnknownFormat("xml".into());
        assert!(error.to_string().contains("'xml'"));
    }
}
