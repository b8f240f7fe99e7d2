//! Contact TUI - a terminal contact form with inline validation
//!
//! The [`validator`] module holds the pure field checks; the rest of the
//! crate binds them to a Ratatui form.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
pub mod validator;
