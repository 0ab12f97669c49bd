//! Boolean validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean value is `true`, e.g. a consent checkbox.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::must_accept("") }
    fn is_true();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_is_true() {
        assert!(is_true().validate(&true).is_ok());
        assert_eq!(is_true().validate(&false).unwrap_err().code, "must_accept");
    }
}
