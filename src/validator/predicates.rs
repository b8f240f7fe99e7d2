//! String and keystroke predicates used by the field validators

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part and domain are each one or more dot-separated segments of
/// alphanumerics, underscore and hyphen. Not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_\-]+(\.[a-zA-Z0-9_\-]+)*@[a-zA-Z0-9_\-]+(\.[a-zA-Z0-9_\-]+)*$")
        .expect("email pattern is valid")
});

/// Length of the extension-style code checked by [`is_fixed_digit_code`]
pub const EXTENSION_CODE_LENGTH: usize = 4;

/// Check whether a string has content once leading and trailing whitespace
/// is ignored.
pub fn is_not_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Check whether a string contains only the characters `0-9`.
///
/// An empty string is not considered to be digits.
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether a string is exactly `len` ASCII digits
pub fn is_fixed_digit_code(text: &str, len: usize) -> bool {
    text.len() == len && is_all_digits(text)
}

/// Check whether a string's length lies within `[min, max]`.
///
/// When `max` is `None` the length must be exactly `min`. Length is counted
/// in characters, not bytes.
pub fn is_length_in_range(text: &str, min: usize, max: Option<usize>) -> bool {
    let max = max.unwrap_or(min);
    let length = text.chars().count();
    length >= min && length <= max
}

pub fn is_valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Accept a keystroke only if its character code is a digit
pub fn is_digit_keystroke(code: u32) -> bool {
    (u32::from('0')..=u32::from('9')).contains(&code)
}

/// Accept a keystroke only if its character code is an upper-case ASCII letter
pub fn is_uppercase_keystroke(code: u32) -> bool {
    (u32::from('A')..=u32::from('Z')).contains(&code)
}
