//! Per-field validation verdicts.

use serde::Serialize;

use crate::foundation::ValidationError;

/// Verdict for one field: valid, or invalid with the message its error slot
/// should show.
///
/// Recomputed on every blur, input and submit; never stored beyond the
/// current interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    field: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ValidationResult {
    /// A passing verdict.
    pub fn valid(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: true,
            code: None,
            message: None,
        }
    }

    /// A failing verdict carrying the error's code and message.
    pub fn invalid(field: impl Into<String>, error: &ValidationError) -> Self {
        Self {
            field: field.into(),
            valid: false,
            code: Some(error.code.to_string()),
            message: Some(error.message.to_string()),
        }
    }

    /// Name of the validated field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Error code of a failing verdict (`required`, `min_length`, ...).
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Message for the error slot; `None` when valid.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_message() {
        let result = ValidationResult::valid("name");
        assert!(result.is_valid());
        assert_eq!(result.field(), "name");
        assert_eq!(result.message(), None);
        assert_eq!(result.code(), None);
    }

    #[test]
    fn test_invalid_copies_error() {
        let err = ValidationError::new("required", "Nome é obrigatório");
        let result = ValidationResult::invalid("name", &err);
        assert!(!result.is_valid());
        assert_eq!(result.code(), Some("required"));
        assert_eq!(result.message(), Some("Nome é obrigatório"));
    }
}
