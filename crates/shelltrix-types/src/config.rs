//! Shell configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration:
//!
//! ```toml
//! prompt = "goose> "
//! banner = "Welcome. Type 'help' to list commands."
//! ignore_case = true
//! interrupt_status = 130
//! show_hints = true
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShellError};

/// Exit status used when input is interrupted (128 + SIGINT).
pub const DEFAULT_INTERRUPT_STATUS: i32 = 130;

/// Runtime settings for a shell session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Prompt shown before each input line.
    pub prompt: String,
    /// Optional greeting printed once when the loop starts.
    pub banner: Option<String>,
    /// Case-insensitive prefix matching for completions.
    pub ignore_case: bool,
    /// Process exit status reported when input is interrupted.
    pub interrupt_status: i32,
    /// Show the first completion inline as a hint while typing.
    pub show_hints: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: None,
            ignore_case: true,
            interrupt_status: DEFAULT_INTERRUPT_STATUS,
            show_hints: true,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.interrupt_status == 0 {
            return Err(ShellError::Config(
                "interrupt_status must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
