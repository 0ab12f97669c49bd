//! AND combinator - logical conjunction of validators
//!
//! Field rules are ordered checks where the first failing check decides the
//! message, which is exactly what a left-to-right short-circuiting AND gives.
//!
//! ```rust
//! use contact_validator::combinators::And;
//! use contact_validator::foundation::Validate;
//! use contact_validator::validators::{min_length, not_empty};
//!
//! let validator = And::new(not_empty(), min_length(2));
//! assert!(validator.validate("Ana").is_ok());
//! assert!(validator.validate("A").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an AND combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
