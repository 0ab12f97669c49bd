//! Core traits for the validation system

use std::borrow::Cow;

use crate::combinators::{And, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type; `?Sized` inputs such as `str` are allowed.
///
/// # Examples
///
/// ```rust
/// use contact_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::new("no_digits", "Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoDigits.validate("Ana").is_ok());
/// assert!(NoDigits.validate("Ana 2").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so the left validator's error
    /// wins when both would fail.
    ///
    /// ```rust
    /// use contact_validator::prelude::*;
    ///
    /// let validator = not_empty().and(min_length(10));
    /// assert_eq!(validator.validate("").unwrap_err().code, "required");
    /// assert_eq!(validator.validate("curto").unwrap_err().code, "min_length");
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the error message produced by this validator.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}
