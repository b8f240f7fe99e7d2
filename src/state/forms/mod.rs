//! Form domain layer
//!
//! Type-safe form handling for the contact view.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, FormButton, BUTTONS_ROW};
pub use field::{FormField, KeyFilter};
