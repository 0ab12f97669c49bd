//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so "Zé" counts as
//! two characters.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Fails with the `required` code: an empty text field is a missing one.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required("") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}
