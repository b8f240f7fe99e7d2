//! User-input errors produced by a validation pass

use thiserror::Error;

/// A single problem with the submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name")]
    MissingName,
    #[error("Please enter a valid email address")]
    MissingEmail,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Please enter a valid mobile number")]
    MissingMobile,
    #[error("Please enter your message")]
    MissingMessage,
}

/// Errors from one validation pass, rendered together under a heading.
///
/// Never empty: a pass with no errors produces no report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    messages: Vec<ValidationError>,
}

impl ErrorReport {
    pub const HEADING: &'static str =
        "There were errors while processing this contact form. Please correct it and submit again.";

    /// Wrap a message list, returning `None` when it is empty
    pub fn from_messages(messages: Vec<ValidationError>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    pub fn messages(&self) -> &[ValidationError] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a constructed report
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::HEADING)?;
        for message in &self.messages {
            write!(f, "\n  - {message}")?;
        }
        Ok(())
    }
}
