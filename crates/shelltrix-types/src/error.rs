//! Error types for shelltrix.

use std::io;

/// Errors produced by the shell core.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("No such command: '{0}'")]
    UnknownCommand(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("line editor error: {0}")]
    Editor(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ShellError {
    /// Shorthand for handler failures.
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;
