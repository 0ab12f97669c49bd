//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format: `local@domain.tld`, no whitespace, one `@`.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", "email") }
    fn email();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_email() {
        let validator = email();
        assert!(validator.validate("a@b.co").is_ok());
        assert!(validator.validate("ana@x.com").is_ok());
        assert!(validator.validate("a@b").is_err());
        assert!(validator.validate("a@@b.com").is_err());
        assert!(validator.validate("ana silva@x.com").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_email_error_code() {
        let err = email().validate("invalid").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("email"));
    }
}
