//! Configuration handling for the contact form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Notice shown after a form passes validation
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting me. I will get back to you soon.";

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Only accept upper-case keystrokes in the first name field
    pub uppercase_first_name: Option<bool>,
    /// Clear the form after a successful submit
    pub clear_on_success: Option<bool>,
    /// Notice shown after a successful submit
    pub success_message: Option<String>,
}

impl ContactConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: ContactConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn uppercase_first_name(&self) -> bool {
        self.uppercase_first_name.unwrap_or(false)
    }

    pub fn clear_on_success(&self) -> bool {
        self.clear_on_success.unwrap_or(false)
    }

    pub fn success_message(&self) -> &str {
        self.success_message
            .as_deref()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
    }
}
