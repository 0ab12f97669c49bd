//! The contact form's field rules.
//!
//! Each field has one rule made of ordered checks; the first failing check
//! decides the message. The table is closed: a name outside [`FieldName`]
//! has no rule and always passes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::result::ValidationResult;
use crate::validators::{email, is_true, min_length, not_empty, phone_mask};

/// Minimum characters for the name field.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum characters for the message field.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// User-facing messages, pt-BR.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Nome é obrigatório";
    pub const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres";
    pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
    pub const EMAIL_INVALID: &str = "E-mail inválido";
    pub const PHONE_REQUIRED: &str = "Telefone é obrigatório";
    pub const PHONE_INVALID: &str = "Telefone inválido. Use o formato (11) 12345-6789";
    pub const MESSAGE_REQUIRED: &str = "Mensagem é obrigatória";
    pub const MESSAGE_TOO_SHORT: &str = "Mensagem deve ter pelo menos 10 caracteres";
    pub const PRIVACY_REQUIRED: &str = "Você deve aceitar os termos de privacidade";
}

// ============================================================================
// FIELD NAME
// ============================================================================

/// The fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Message,
    /// Privacy-terms checkbox.
    Privacy,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Message,
        Self::Privacy,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Privacy => "privacy",
        }
    }

    /// Whether the field is a checkbox rather than a text input.
    pub const fn is_checkbox(self) -> bool {
        matches!(self, Self::Privacy)
    }

    /// Runs the field's checks, first failure wins.
    ///
    /// Text values are trimmed first, except the phone, which is checked
    /// exactly as masked.
    pub fn check(self, value: &FieldValue) -> Result<(), ValidationError> {
        let text = value.text();
        let outcome = match self {
            Self::Name => not_empty()
                .with_message(messages::NAME_REQUIRED)
                .and(min_length(NAME_MIN_CHARS).with_message(messages::NAME_TOO_SHORT))
                .validate(text.trim()),
            Self::Email => not_empty()
                .with_message(messages::EMAIL_REQUIRED)
                .and(email().with_message(messages::EMAIL_INVALID))
                .validate(text.trim()),
            Self::Phone => not_empty()
                .with_message(messages::PHONE_REQUIRED)
                .and(phone_mask().with_message(messages::PHONE_INVALID))
                .validate(text),
            Self::Message => not_empty()
                .with_message(messages::MESSAGE_REQUIRED)
                .and(min_length(MESSAGE_MIN_CHARS).with_message(messages::MESSAGE_TOO_SHORT))
                .validate(text.trim()),
            Self::Privacy => is_true()
                .with_message(messages::PRIVACY_REQUIRED)
                .validate(&value.is_checked()),
        };
        outcome.map_err(|err| err.with_field(self.as_str()))
    }

    /// Validates a value for this field.
    pub fn validate(self, value: &FieldValue) -> ValidationResult {
        match self.check(value) {
            Ok(()) => ValidationResult::valid(self.as_str()),
            Err(err) => ValidationResult::invalid(self.as_str(), &err),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not one of the form's fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Current value of an input: text for inputs and textareas, a flag for
/// checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Text content; empty for checkboxes.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Checked(_) => "",
        }
    }

    /// Checked state; `false` for text inputs.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Checked(checked) => *checked,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates a field by name.
///
/// `checked` is only read for checkboxes; a missing flag counts as unchecked.
/// Unknown field names have no rule and pass.
///
/// ```
/// use contact_validator::validate;
///
/// assert!(validate("email", " ana@x.com ", None).is_valid());
/// assert!(!validate("privacy", "", None).is_valid());
/// assert!(validate("newsletter", "", None).is_valid());
/// ```
pub fn validate(field: &str, raw: &str, checked: Option<bool>) -> ValidationResult {
    match field.parse::<FieldName>() {
        Ok(name) if name.is_checkbox() => {
            name.validate(&FieldValue::Checked(checked.unwrap_or(false)))
        }
        Ok(name) => name.validate(&FieldValue::from(raw)),
        Err(_) => ValidationResult::valid(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "Name".parse::<FieldName>(),
            Err(UnknownField("Name".to_string()))
        );
    }

    #[test]
    fn test_error_carries_field() {
        let err = FieldName::Email
            .check(&FieldValue::from("nope"))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("email"));
        assert_eq!(err.message, messages::EMAIL_INVALID);
    }

    #[test]
    fn test_checkbox_ignores_text() {
        let result = FieldName::Privacy.validate(&FieldValue::from("on"));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_text_field_given_flag() {
        let result = FieldName::Name.validate(&FieldValue::Checked(true));
        assert_eq!(result.message(), Some(messages::NAME_REQUIRED));
    }
}
