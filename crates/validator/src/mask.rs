//! Progressive phone masking.
//!
//! The phone input is re-masked on every keystroke: non-digits are dropped,
//! at most [`MAX_PHONE_DIGITS`] digits are kept, and the mask grows with the
//! digit count until it reaches `(DD) DDDD-DDDD` (10 digits) or
//! `(DD) DDDDD-DDDD` (11 digits).

/// Area code (2) plus a 9-digit mobile number.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Extracts the significant digits of a phone input, capped at
/// [`MAX_PHONE_DIGITS`].
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Applies the phone mask to whatever the user has typed so far.
///
/// | digits | output            |
/// |--------|-------------------|
/// | 0      | (empty)           |
/// | 1-2    | `(1` / `(11`      |
/// | 3-6    | `(11) 9876`       |
/// | 7-10   | `(11) 9876-5432`  |
/// | 11     | `(11) 98765-4321` |
///
/// Masking its own output yields the same string.
///
/// ```
/// use contact_validator::mask::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1198765432"), "(11) 9876-5432");
/// assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
/// assert_eq!(format_phone("119876543210000"), "(11) 98765-4321");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    // ASCII digits only, so byte offsets are char offsets.
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
