//! Phone number validator for the masked Brazilian format.
//!
//! Accepts exactly what [`format_phone`](crate::mask::format_phone) produces
//! for a complete number: a two digit area code in parentheses, a space, a
//! four or five digit exchange, a dash and four digits.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// Canonical mask: `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
pub const PHONE_MASK: &str = "(DD) DDDDD-DDDD";

// `\d` in the regex crate matches any Unicode digit; the mask only allows ASCII.
static PHONE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\([0-9]{2}\)\s[0-9]{4,5}-[0-9]{4}$").expect("phone pattern is a valid regex")
});

// ============================================================================
// PHONE MASK VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a phone number is fully masked.
    ///
    /// ```
    /// use contact_validator::foundation::Validate;
    /// use contact_validator::validators::phone_mask;
    ///
    /// assert!(phone_mask().validate("(11) 98765-4321").is_ok());
    /// assert!(phone_mask().validate("(11) 9876-5432").is_ok());
    /// assert!(phone_mask().validate("11987654321").is_err());
    /// ```
    pub PhoneMask for str;
    rule(input) { PHONE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", PHONE_MASK) }
    fn phone_mask();
}
