//! Application state definitions

use super::forms::ContactForm;
use crate::config::ContactConfig;

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The contact form, with its errors area
    pub form: ContactForm,
    /// Notice overlay shown after a successful submit
    pub notice: Option<String>,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Number of submits that passed validation this session
    pub submitted_count: usize,
}

impl AppState {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            form: ContactForm::setup(config),
            ..Default::default()
        }
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
