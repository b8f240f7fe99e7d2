//! Form field value objects

use crate::validator::{is_digit_keystroke, is_uppercase_keystroke, FieldRole};

/// Keypress filter bound to a field; rejected keystrokes are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter {
    Digits,
    Uppercase,
}

impl KeyFilter {
    pub fn accepts(&self, c: char) -> bool {
        let code = u32::from(c);
        match self {
            KeyFilter::Digits => is_digit_keystroke(code),
            KeyFilter::Uppercase => is_uppercase_keystroke(code),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub role: FieldRole,
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub key_filter: Option<KeyFilter>,
}

impl FormField {
    /// Create a new empty text field for a role
    pub fn text(role: FieldRole, is_multiline: bool) -> Self {
        Self {
            role,
            name: role.selector().to_string(),
            label: role.label().to_string(),
            value: String::new(),
            is_multiline,
            key_filter: None,
        }
    }

    /// Bind a keypress filter to this field
    pub fn with_key_filter(mut self, filter: KeyFilter) -> Self {
        self.key_filter = Some(filter);
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether a typed character passes this field's keypress filter
    pub fn accepts(&self, c: char) -> bool {
        self.key_filter.map_or(true, |filter| filter.accepts(c))
    }

    /// Push a character to the field value if the keypress filter accepts it.
    /// Returns false when the keystroke was suppressed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Newlines bypass the keypress filter; only multiline fields take them
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_takes_role_selector_and_label() {
        let field = FormField::text(FieldRole::Mobile, false);
        assert_eq!(field.name, "mobile");
        assert_eq!(field.label, "Mobile");
        assert_eq!(field.as_text(), "");
        assert!(field.key_filter.is_none());
    }

    #[test]
    fn test_unfiltered_field_accepts_anything() {
        let mut field = FormField::text(FieldRole::Email, false);
        for c in "a.b@c-1".chars() {
            assert!(field.push_char(c));
        }
        assert_eq!(field.as_text(), "a.b@c-1");
    }

    #[test]
    fn test_digit_filter_suppresses_non_digits() {
        let mut field = FormField::text(FieldRole::Mobile, false).with_key_filter(KeyFilter::Digits);
        assert!(field.push_char('0'));
        assert!(!field.push_char('x'));
        assert!(!field.push_char('+'));
        assert!(field.push_char('9'));
        assert_eq!(field.as_text(), "09");
    }

    #[test]
    fn test_uppercase_filter() {
        let mut field =
            FormField::text(FieldRole::FirstName, false).with_key_filter(KeyFilter::Uppercase);
        assert!(field.push_char('A'));
        assert!(!field.push_char('a'));
        assert!(!field.push_char('1'));
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_newline_only_on_multiline() {
        let mut single = FormField::text(FieldRole::FirstName, false);
        single.push_newline();
        assert_eq!(single.as_text(), "");

        let mut multi = FormField::text(FieldRole::Message, true);
        multi.push_newline();
        assert_eq!(multi.as_text(), "\n");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut field = FormField::text(FieldRole::LastName, false);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.clear();
        assert_eq!(field.as_text(), "");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
