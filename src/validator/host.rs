//! Trait abstraction for the form a validation pass reads from and reports to

use super::error::ErrorReport;

/// Identifier of the output area error reports are rendered into
pub const ERRORS_TARGET: &str = "errors";

/// The role a field plays in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    FirstName,
    LastName,
    Email,
    Mobile,
    Message,
}

impl FieldRole {
    /// All roles in the order they appear on the form
    pub const ALL: [FieldRole; 5] = [
        FieldRole::FirstName,
        FieldRole::LastName,
        FieldRole::Email,
        FieldRole::Mobile,
        FieldRole::Message,
    ];

    /// Selector the field is addressed by
    pub fn selector(&self) -> &'static str {
        match self {
            Self::FirstName => "fname",
            Self::LastName => "lname",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Message => "msg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Mobile => "Mobile",
            Self::Message => "Message",
        }
    }
}

/// Anything that can supply field values and display an error report
#[cfg_attr(test, mockall::automock)]
pub trait FormHost {
    /// Current raw value of the field with the given role
    fn field_value(&self, role: FieldRole) -> String;

    /// Render a report into the errors area, replacing any previous one
    fn show_errors(&mut self, report: ErrorReport);

    /// Remove any report from the errors area
    fn clear_errors(&mut self);
}
