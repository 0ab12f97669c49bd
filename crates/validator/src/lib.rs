//! # contact-validator
//!
//! Field validation for the landing-page contact form.
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_validator::prelude::*;
//!
//! let result = validate("email", "ana@x.com", None);
//! assert!(result.is_valid());
//!
//! let result = validate("name", "A", None);
//! assert_eq!(result.message(), Some("Nome deve ter pelo menos 2 caracteres"));
//!
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`]: small building blocks ([`NotEmpty`](validators::NotEmpty),
//!   [`MinLength`](validators::MinLength), [`Email`](validators::Email),
//!   [`PhoneMask`](validators::PhoneMask), [`IsTrue`](validators::IsTrue))
//! - [`combinators`]: `and` / `with_message` composition
//! - [`rules`]: the fixed contact-form rule table and the [`validate`] entry point
//! - [`mask`]: the progressive phone formatter

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod mask;
pub mod prelude;
pub mod result;
pub mod rules;
pub mod validators;

pub use mask::format_phone;
pub use result::ValidationResult;
pub use rules::{FieldName, FieldValue, UnknownField, validate};
