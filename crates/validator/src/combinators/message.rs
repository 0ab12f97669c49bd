//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Used to attach the user-facing, localized message of a field rule to a
/// generic building-block validator.
///
/// ```rust
/// use contact_validator::combinators::WithMessage;
/// use contact_validator::foundation::Validate;
/// use contact_validator::validators::min_length;
///
/// let validator = WithMessage::new(min_length(10), "Mensagem deve ter pelo menos 10 caracteres");
/// let err = validator.validate("curta").unwrap_err();
/// assert_eq!(err.message, "Mensagem deve ter pelo menos 10 caracteres");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|err| err.with_message(self.message.clone()))
    }
}

/// Wraps a validator with a custom error message.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{is_true, not_empty};

    #[test]
    fn test_message_replaced() {
        let validator = with_message(not_empty(), "Nome é obrigatório");
        let err = validator.validate("").unwrap_err();
        assert_eq!(err.message, "Nome é obrigatório");
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_code_kept() {
        let validator = with_message(is_true(), "aceite");
        let err = validator.validate(&false).unwrap_err();
        assert_eq!(err.code, "must_accept");
        assert_eq!(err.message, "aceite");
    }

    #[test]
    fn test_success_passes_through() {
        let validator = with_message(not_empty(), "unused");
        assert!(validator.validate("x").is_ok());
    }
}
