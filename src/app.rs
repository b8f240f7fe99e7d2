//! Application state and core logic

use crate::config::ContactConfig;
use crate::state::{AppState, Form, FormButton};
use crate::validator::{validate_form, ErrorReport};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: ContactConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the form bound per `config`
    pub fn new(config: ContactConfig) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports releases too; only presses are keystrokes
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        let on_buttons = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Up | KeyCode::Char('k') if on_buttons => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => match self.state.form.selected() {
                FormButton::Submit => {
                    self.submit();
                }
                FormButton::Reset => self.reset(),
            },
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit();
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.reset();
            }
            KeyCode::Esc => self.quit = true,
            // Field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons => {
                self.input_char(c, key.modifiers.contains(KeyModifiers::SHIFT));
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Enter => {
                // Enter in the message field adds a newline, elsewhere it advances
                if self.state.form.is_active_field_multiline() {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        field.push_newline();
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            _ => {}
        }
    }

    /// Route a typed character through the active field's keypress filter
    fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.state.form.get_active_field_mut() {
            if !field.push_char(ch) {
                tracing::debug!(field = %field.name, key = ?ch, "keystroke rejected");
            }
        }
    }

    /// Run a validation pass over the form.
    ///
    /// Returns true when the form passed and would be sent. Nothing is sent
    /// anywhere; a passing form only shows the configured notice.
    pub fn submit(&mut self) -> bool {
        if validate_form(&mut self.state.form) {
            self.state.submitted_count += 1;
            tracing::info!(
                submitted = self.state.submitted_count,
                "contact form accepted"
            );
            self.state.notice = Some(self.config.success_message().to_string());
            self.state.status_message = Some(format!(
                "Message accepted at {}",
                Local::now().format("%H:%M:%S")
            ));
            if self.config.clear_on_success() {
                self.state.form.reset();
            }
            true
        } else {
            let count = self.state.form.errors.as_ref().map_or(0, ErrorReport::len);
            tracing::info!(errors = count, "contact form rejected");
            self.state.status_message = Some(match count {
                1 => "1 error, see below".to_string(),
                n => format!("{n} errors, see below"),
            });
            false
        }
    }

    /// Clear all fields and the errors area
    pub fn reset(&mut self) {
        self.state.form.reset();
        self.state.status_message = Some("Form cleared".to_string());
    }
}
