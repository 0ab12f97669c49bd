//! Contact-form rule table tests.
//!
//! Exercises `validate` exactly as the form does: by field name, with raw
//! input values.

use contact_validator::rules::messages;
use contact_validator::{FieldName, FieldValue, format_phone, validate};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case("name", messages::NAME_REQUIRED)]
#[case("email", messages::EMAIL_REQUIRED)]
#[case("phone", messages::PHONE_REQUIRED)]
#[case("message", messages::MESSAGE_REQUIRED)]
#[case("privacy", messages::PRIVACY_REQUIRED)]
fn empty_value_is_required(#[case] field: &str, #[case] expected: &str) {
    let result = validate(field, "", Some(false));
    assert!(!result.is_valid());
    assert_eq!(result.message(), Some(expected));
}

#[rstest]
#[case("name")]
#[case("email")]
#[case("message")]
fn whitespace_only_is_required(#[case] field: &str) {
    let result = validate(field, "   \t ", None);
    assert_eq!(result.code(), Some("required"));
}

#[test]
fn every_field_has_a_required_message() {
    for field in FieldName::ALL {
        let value = if field.is_checkbox() {
            FieldValue::Checked(false)
        } else {
            FieldValue::default()
        };
        let result = field.validate(&value);
        assert_eq!(result.field(), field.as_str());
        assert!(result.message().is_some(), "{field} accepted an empty value");
    }
}

// ============================================================================
// SECOND CHECKS
// ============================================================================

#[rstest]
#[case("name", "A", messages::NAME_TOO_SHORT)]
#[case("name", "  A  ", messages::NAME_TOO_SHORT)]
#[case("email", "a@b", messages::EMAIL_INVALID)]
#[case("email", "a@@b.com", messages::EMAIL_INVALID)]
#[case("phone", "(11) 9876", messages::PHONE_INVALID)]
#[case("phone", "11987654321", messages::PHONE_INVALID)]
#[case("message", "curta", messages::MESSAGE_TOO_SHORT)]
fn second_check_message(#[case] field: &str, #[case] value: &str, #[case] expected: &str) {
    let result = validate(field, value, None);
    assert!(!result.is_valid());
    assert_eq!(result.message(), Some(expected));
}

#[rstest]
#[case("name", "Ana Silva")]
#[case("name", "Zé")]
#[case("email", "a@b.co")]
#[case("email", "  ana@x.com  ")]
#[case("phone", "(11) 91234-5678")]
#[case("phone", "(11) 9123-4567")]
#[case("message", "Preciso de ajuda urgente")]
fn valid_values_pass(#[case] field: &str, #[case] value: &str) {
    let result = validate(field, value, None);
    assert!(result.is_valid(), "{field}={value:?}: {:?}", result.message());
    assert_eq!(result.message(), None);
}

#[test]
fn phone_is_not_trimmed() {
    let result = validate("phone", " (11) 91234-5678", None);
    assert_eq!(result.message(), Some(messages::PHONE_INVALID));
}

#[test]
fn formatted_phone_input_validates() {
    let masked = format_phone("11912345678");
    assert!(validate("phone", &masked, None).is_valid());
}

// ============================================================================
// CHECKBOX AND UNKNOWN FIELDS
// ============================================================================

#[test]
fn privacy_must_be_checked() {
    assert!(validate("privacy", "", Some(true)).is_valid());
    assert!(!validate("privacy", "on", Some(false)).is_valid());
    assert!(!validate("privacy", "on", None).is_valid());
}

#[rstest]
#[case("newsletter")]
#[case("")]
#[case("NAME")]
fn unknown_field_passes(#[case] field: &str) {
    let result = validate(field, "", None);
    assert!(result.is_valid());
    assert_eq!(result.field(), field);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn result_serializes_for_display() {
    let invalid = serde_json::to_value(validate("name", "A", None)).unwrap();
    assert_eq!(
        invalid,
        serde_json::json!({
            "field": "name",
            "valid": false,
            "code": "min_length",
            "message": messages::NAME_TOO_SHORT,
        })
    );

    let valid = serde_json::to_value(validate("name", "Ana", None)).unwrap();
    assert_eq!(valid, serde_json::json!({ "field": "name", "valid": true }));
}
