//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose with the
//! combinators from [`crate::combinators`]:
//!
//! ```rust
//! use contact_validator::prelude::*;
//!
//! let validator = not_empty().and(min_length(2));
//! assert!(validator.validate("Ana").is_ok());
//! assert!(validator.validate("A").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
