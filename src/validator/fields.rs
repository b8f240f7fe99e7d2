//! Field validators and the form-level validation pass

use super::error::{ErrorReport, ValidationError};
use super::host::{FieldRole, FormHost};
use super::predicates::{is_not_empty, is_valid_email};

/// Only the first name is required; the last name is optional
pub fn validate_name(value: &str, messages: &mut Vec<ValidationError>) {
    if !is_not_empty(value) {
        messages.push(ValidationError::MissingName);
    }
}

pub fn validate_email(value: &str, messages: &mut Vec<ValidationError>) {
    if !is_not_empty(value) {
        messages.push(ValidationError::MissingEmail);
    } else if !is_valid_email(value) {
        messages.push(ValidationError::InvalidEmail);
    }
}

pub fn validate_mobile(value: &str, messages: &mut Vec<ValidationError>) {
    if !is_not_empty(value) {
        messages.push(ValidationError::MissingMobile);
    }
}

pub fn validate_message(value: &str, messages: &mut Vec<ValidationError>) {
    if !is_not_empty(value) {
        messages.push(ValidationError::MissingMessage);
    }
}

/// Snapshot of every field at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
}

impl ContactValues {
    pub fn read(host: &dyn FormHost) -> Self {
        Self {
            first_name: host.field_value(FieldRole::FirstName),
            last_name: host.field_value(FieldRole::LastName),
            email: host.field_value(FieldRole::Email),
            mobile: host.field_value(FieldRole::Mobile),
            message: host.field_value(FieldRole::Message),
        }
    }

    /// Run every field validator in form order, collecting all failures
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut messages = Vec::new();
        validate_name(&self.first_name, &mut messages);
        validate_email(&self.email, &mut messages);
        validate_mobile(&self.mobile, &mut messages);
        validate_message(&self.message, &mut messages);
        messages
    }
}

/// Validate the form before submission.
///
/// Returns true when the form may be submitted. On failure the error report
/// is rendered into the host's errors area and false is returned.
pub fn validate_form(host: &mut dyn FormHost) -> bool {
    let values = ContactValues::read(host);
    match ErrorReport::from_messages(values.validate()) {
        None => {
            host.clear_errors();
            true
        }
        Some(report) => {
            tracing::debug!(count = report.len(), "contact form failed validation");
            host.show_errors(report);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::host::MockFormHost;
    use mockall::predicate::eq;

    fn valid_values() -> ContactValues {
        ContactValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mobile: "0211234567".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn mock_host_with(values: ContactValues) -> MockFormHost {
        let mut host = MockFormHost::new();
        host.expect_field_value().returning(move |role| match role {
            FieldRole::FirstName => values.first_name.clone(),
            FieldRole::LastName => values.last_name.clone(),
            FieldRole::Email => values.email.clone(),
            FieldRole::Mobile => values.mobile.clone(),
            FieldRole::Message => values.message.clone(),
        });
        host
    }

    mod field_validators {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_name_blank_appends_error() {
            let mut messages = Vec::new();
            validate_name("   ", &mut messages);
            assert_eq!(messages, vec![ValidationError::MissingName]);
        }

        #[test]
        fn test_name_present_appends_nothing() {
            let mut messages = Vec::new();
            validate_name("Ada", &mut messages);
            assert!(messages.is_empty());
        }

        #[test]
        fn test_email_blank_reports_missing_not_invalid() {
            let mut messages = Vec::new();
            validate_email("", &mut messages);
            assert_eq!(messages, vec![ValidationError::MissingEmail]);
        }

        #[test]
        fn test_email_malformed_reports_invalid() {
            let mut messages = Vec::new();
            validate_email("not-an-email", &mut messages);
            assert_eq!(messages, vec![ValidationError::InvalidEmail]);
        }

        #[test]
        fn test_email_surrounding_whitespace_is_invalid() {
            let mut messages = Vec::new();
            validate_email(" ada@example.com ", &mut messages);
            assert_eq!(messages, vec![ValidationError::InvalidEmail]);
        }

        #[test]
        fn test_mobile_and_message_blank() {
            let mut messages = Vec::new();
            validate_mobile("", &mut messages);
            validate_message("\n\n", &mut messages);
            assert_eq!(
                messages,
                vec![ValidationError::MissingMobile, ValidationError::MissingMessage]
            );
        }

        #[test]
        fn test_validators_append_to_existing_list() {
            let mut messages = vec![ValidationError::MissingName];
            validate_mobile("", &mut messages);
            assert_eq!(
                messages,
                vec![ValidationError::MissingName, ValidationError::MissingMobile]
            );
        }
    }

    mod contact_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_blank_yields_four_errors_in_order() {
            let messages = ContactValues::default().validate();
            assert_eq!(
                messages,
                vec![
                    ValidationError::MissingName,
                    ValidationError::MissingEmail,
                    ValidationError::MissingMobile,
                    ValidationError::MissingMessage,
                ]
            );
        }

        #[test]
        fn test_all_valid_yields_no_errors() {
            assert!(valid_values().validate().is_empty());
        }

        #[test]
        fn test_last_name_is_not_required() {
            let values = ContactValues {
                last_name: String::new(),
                ..valid_values()
            };
            assert!(values.validate().is_empty());
        }

        #[test]
        fn test_errors_are_collected_not_short_circuited() {
            let values = ContactValues {
                first_name: String::new(),
                email: "a@b@c.com".to_string(),
                ..valid_values()
            };
            assert_eq!(
                values.validate(),
                vec![ValidationError::MissingName, ValidationError::InvalidEmail]
            );
        }

        #[test]
        fn test_read_uses_every_role() {
            let host = mock_host_with(valid_values());
            assert_eq!(ContactValues::read(&host), valid_values());
        }
    }

    mod validate_form_pass {
        use super::*;

        #[test]
        fn test_valid_form_clears_errors_and_submits() {
            let mut host = mock_host_with(valid_values());
            host.expect_clear_errors().times(1).return_const(());
            host.expect_show_errors().never();

            assert!(validate_form(&mut host));
        }

        #[test]
        fn test_blank_form_renders_report_and_blocks_submit() {
            let mut host = mock_host_with(ContactValues::default());
            let expected = ErrorReport::from_messages(vec![
                ValidationError::MissingName,
                ValidationError::MissingEmail,
                ValidationError::MissingMobile,
                ValidationError::MissingMessage,
            ])
            .unwrap();
            host.expect_show_errors()
                .with(eq(expected))
                .times(1)
                .return_const(());
            host.expect_clear_errors().never();

            assert!(!validate_form(&mut host));
        }

        #[test]
        fn test_each_pass_is_independent() {
            let mut host = mock_host_with(ContactValues {
                mobile: String::new(),
                ..valid_values()
            });
            host.expect_show_errors().times(2).return_const(());

            assert!(!validate_form(&mut host));
            assert!(!validate_form(&mut host));
        }
    }
}
