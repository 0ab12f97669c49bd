//! Prelude module for convenient imports.
//!
//! `use contact_validator::prelude::*;` brings in the traits, the built-in
//! validators, the combinators and the contact-form entry points.

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, WithMessage, and, with_message};

pub use crate::mask::{MAX_PHONE_DIGITS, format_phone};
pub use crate::result::ValidationResult;
pub use crate::rules::{FieldName, FieldValue, validate};
