//! Embeddable interactive shell core.
//!
//! Host code registers commands (with aliases, optional argument
//! completion, and optional extended help) into a [`CommandRegistry`], then
//! hands the registry to a [`Shell`] and runs it with a [`LineEditor`].
//! While the user types, the editor asks [`Completions`] for suggestions;
//! the router switches between top-level names and a command's own
//! argument suggestions depending on where the cursor is. Submitted lines
//! are dispatched by name, then the `help`/`?` words, then alias.
//!
//! Everything here is single-threaded. Registration happens before
//! [`Shell::new`], which takes ownership of the registry.

mod builtins;
mod command;
pub mod completion;
mod dispatch;
#[cfg(feature = "rustyline")]
pub mod editor;
pub mod help;
mod registry;
mod shell;

/// A single executable command trait.
pub use command::Command;
/// Output produced by a command (text, table, exit signal).
pub use command::CommandOutput;
/// Closure-backed command record.
pub use command::FnCommand;
/// Shared completion handle and the router behind it.
pub use completion::{CompletionRouter, Completions, RouterState};
/// Whitespace tokenizer used by dispatch.
pub use dispatch::tokenize;
/// Terminal line editor (rustyline).
#[cfg(feature = "rustyline")]
pub use editor::RustylineEditor;
/// Registry of commands and aliases.
pub use registry::{AliasConflict, AliasConflictReason, CommandRegistry, Resolution};
/// Interactive loop and the line editor seam.
pub use shell::{ExitStatus, LineEditor, ReadLine, Shell};

pub use shelltrix_types::error::{Result, ShellError};
pub use shelltrix_types::{Document, ShellConfig, Suggestion};
