//! Contact form state and its binding to the validator

use super::field::{FormField, KeyFilter};
use crate::config::ContactConfig;
use crate::validator::{ErrorReport, FieldRole, FormHost};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the contact form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Reset => "Reset",
        }
    }
}

/// Index of the buttons row, after the five text fields
pub const BUTTONS_ROW: usize = 5;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub mobile: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
    /// Report shown in the errors area, if the last submit failed
    pub errors: Option<ErrorReport>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text(FieldRole::FirstName, false),
            last_name: FormField::text(FieldRole::LastName, false),
            email: FormField::text(FieldRole::Email, false),
            mobile: FormField::text(FieldRole::Mobile, false),
            message: FormField::text(FieldRole::Message, true),
            active_field_index: 0,
            selected_button: 0,
            errors: None,
        }
    }

    /// Create a form with its keypress filters bound.
    ///
    /// The mobile field only accepts digits. The first name only accepts
    /// upper-case letters when `uppercase_first_name` is set.
    pub fn setup(config: &ContactConfig) -> Self {
        let mut form = Self::new();
        form.mobile = form.mobile.with_key_filter(KeyFilter::Digits);
        if config.uppercase_first_name() {
            form.first_name = form.first_name.with_key_filter(KeyFilter::Uppercase);
        }
        tracing::debug!(
            uppercase_first_name = config.uppercase_first_name(),
            "contact form bound"
        );
        form
    }

    pub fn field(&self, role: FieldRole) -> &FormField {
        match role {
            FieldRole::FirstName => &self.first_name,
            FieldRole::LastName => &self.last_name,
            FieldRole::Email => &self.email,
            FieldRole::Mobile => &self.mobile,
            FieldRole::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, role: FieldRole) -> &mut FormField {
        match role {
            FieldRole::FirstName => &mut self.first_name,
            FieldRole::LastName => &mut self.last_name,
            FieldRole::Email => &mut self.email,
            FieldRole::Mobile => &mut self.mobile,
            FieldRole::Message => &mut self.message,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    pub fn selected(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Clear every value and the errors area, keeping bound key filters
    pub fn reset(&mut self) {
        for role in FieldRole::ALL {
            self.field_mut(role).clear();
        }
        self.active_field_index = 0;
        self.selected_button = 0;
        self.errors = None;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1 // five fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let role = *FieldRole::ALL.get(self.active_field_index)?;
        Some(self.field_mut(role))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        // Index 5 is the buttons row, no FormField for it
        FieldRole::ALL.get(index).map(|role| self.field(*role))
    }
}

impl FormHost for ContactForm {
    fn field_value(&self, role: FieldRole) -> String {
        self.field(role).value.clone()
    }

    fn show_errors(&mut self, report: ErrorReport) {
        self.errors = Some(report);
    }

    fn clear_errors(&mut self) {
        self.errors = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{validate_form, ValidationError};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::setup(&ContactConfig::default());
        form.first_name.value = "Ada".to_string();
        form.email.value = "ada@example.com".to_string();
        form.mobile.value = "0211234567".to_string();
        form.message.value = "Hi".to_string();
        form
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected(), FormButton::Submit);
            assert!(form.errors.is_none());
            assert_eq!(form.first_name.name, "fname");
            assert_eq!(form.message.name, "msg");
        }

        #[test]
        fn test_field_count() {
            assert_eq!(ContactForm::new().field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, BUTTONS_ROW);
        }

        #[test]
        fn test_button_cycling_wraps() {
            let mut form = ContactForm::new();
            form.next_button();
            assert_eq!(form.selected(), FormButton::Reset);
            form.next_button();
            assert_eq!(form.selected(), FormButton::Submit);
            form.prev_button();
            assert_eq!(form.selected(), FormButton::Reset);
        }

        #[test]
        fn test_get_field_returns_fields_in_form_order() {
            let form = ContactForm::new();
            let names: Vec<_> = (0..5)
                .map(|i| form.get_field(i).unwrap().name.as_str())
                .collect();
            assert_eq!(names, vec!["fname", "lname", "email", "mobile", "msg"]);
            assert!(form.get_field(BUTTONS_ROW).is_none());
        }

        #[test]
        fn test_get_active_field_mut_none_on_buttons_row() {
            let mut form = ContactForm::new();
            form.active_field_index = BUTTONS_ROW;
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_only_message_is_multiline() {
            let mut form = ContactForm::new();
            assert!(!form.is_active_field_multiline());
            form.active_field_index = 4;
            assert!(form.is_active_field_multiline());
            form.active_field_index = BUTTONS_ROW;
            assert!(!form.is_active_field_multiline());
        }
    }

    mod setup {
        use super::*;

        #[test]
        fn test_mobile_bound_to_digits() {
            let form = ContactForm::setup(&ContactConfig::default());
            assert_eq!(form.mobile.key_filter, Some(KeyFilter::Digits));
            assert!(form.first_name.key_filter.is_none());
        }

        #[test]
        fn test_uppercase_first_name_when_configured() {
            let config = ContactConfig {
                uppercase_first_name: Some(true),
                ..Default::default()
            };
            let form = ContactForm::setup(&config);
            assert_eq!(form.first_name.key_filter, Some(KeyFilter::Uppercase));
        }

        #[test]
        fn test_reset_keeps_filters() {
            let mut form = filled_form();
            form.active_field_index = 3;
            form.errors = ErrorReport::from_messages(vec![ValidationError::MissingName]);
            form.reset();

            assert_eq!(form.active_field_index, 0);
            assert!(form.errors.is_none());
            for role in FieldRole::ALL {
                assert_eq!(form.field(role).as_text(), "");
            }
            assert_eq!(form.mobile.key_filter, Some(KeyFilter::Digits));
        }
    }

    mod host {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_form_shows_four_errors() {
            let mut form = ContactForm::setup(&ContactConfig::default());
            assert!(!validate_form(&mut form));

            let report = form.errors.as_ref().unwrap();
            assert_eq!(
                report.messages(),
                &[
                    ValidationError::MissingName,
                    ValidationError::MissingEmail,
                    ValidationError::MissingMobile,
                    ValidationError::MissingMessage,
                ]
            );
        }

        #[test]
        fn test_valid_form_renders_no_errors() {
            let mut form = filled_form();
            assert!(validate_form(&mut form));
            assert!(form.errors.is_none());
        }

        #[test]
        fn test_successful_pass_clears_stale_report() {
            let mut form = filled_form();
            form.errors = ErrorReport::from_messages(vec![ValidationError::MissingName]);
            assert!(validate_form(&mut form));
            assert!(form.errors.is_none());
        }

        #[test]
        fn test_field_value_reads_by_role() {
            let form = filled_form();
            assert_eq!(form.field_value(FieldRole::Email), "ada@example.com");
            assert_eq!(form.field_value(FieldRole::LastName), "");
        }
    }
}
