//! Contact form validation
//!
//! Pure predicates and field validators, independent of any UI:
//! - `predicates`: string and keystroke checks
//! - `fields`: per-field validators and the form-level validation pass
//! - `host`: the form abstraction a validation pass reads from
//! - `error`: user-input error kinds and the rendered report

mod error;
mod fields;
mod host;
mod predicates;

pub use error::{ErrorReport, ValidationError};
pub use fields::{
    validate_email, validate_form, validate_message, validate_mobile, validate_name,
    ContactValues,
};
#[cfg(test)]
pub use host::MockFormHost;
pub use host::{FieldRole, FormHost, ERRORS_TARGET};
pub use predicates::{
    is_all_digits, is_digit_keystroke, is_fixed_digit_code, is_length_in_range, is_not_empty,
    is_uppercase_keystroke, is_valid_email, EXTENSION_CODE_LENGTH,
};
