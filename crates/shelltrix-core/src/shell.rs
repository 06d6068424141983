//! The interactive input loop.
//!
//! A [`Shell`] owns a finished [`CommandRegistry`] and repeatedly asks a
//! [`LineEditor`] for a line, dispatching each one to completion before
//! asking for the next. The editor gets a [`Completions`] handle so it can
//! drive the completion router while the user types.

use std::io::Write;
use std::rc::Rc;

use shelltrix_types::ShellConfig;
use shelltrix_types::error::{Result, ShellError};

use crate::command::CommandOutput;
use crate::completion::{CompletionRouter, Completions};
use crate::registry::CommandRegistry;

/// What the line editor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A submitted line.
    Line(String),
    /// The user pressed the interrupt key.
    Interrupted,
    /// End of input (Ctrl-D on an empty line, closed stdin).
    Eof,
}

/// The external line editor: renders the prompt, handles keystrokes, and
/// calls `completions` as the buffer changes.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str, completions: &Completions) -> Result<ReadLine>;
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// A command asked to exit with this status.
    Exited(i32),
    /// Input was interrupted; carries the configured status.
    Interrupted(i32),
    /// The editor reported end of input.
    EndOfInput,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Exited(code) | ExitStatus::Interrupted(code) => *code,
            ExitStatus::EndOfInput => 0,
        }
    }
}

/// An interactive shell session.
///
/// Construction consumes the registry: commands can only be registered
/// during setup, never from inside a running handler.
pub struct Shell {
    registry: Rc<CommandRegistry>,
    completions: Completions,
    config: ShellConfig,
}

impl Shell {
    pub fn new(registry: CommandRegistry, config: ShellConfig) -> Self {
        let registry = Rc::new(registry);
        let completions = Completions::new(
            Rc::clone(&registry),
            CompletionRouter::new(config.ignore_case),
        );
        Self {
            registry,
            completions,
            config,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Handle the line editor uses for completion.
    pub fn completions(&self) -> Completions {
        self.completions.clone()
    }

    /// Run until a command exits, input is interrupted, or input ends.
    ///
    /// Command output and error messages go to `out`. Errors returned from
    /// here are editor or output failures; command failures are reported
    /// to `out` and the loop continues.
    pub fn run<E, W>(&self, editor: &mut E, out: &mut W) -> Result<ExitStatus>
    where
        E: LineEditor + ?Sized,
        W: Write + ?Sized,
    {
        log::info!("Shell started with {} command(s)", self.registry.len());
        if let Some(banner) = &self.config.banner {
            writeln!(out, "{banner}")?;
        }

        loop {
            self.completions.reset();
            let line = match editor.read_line(&self.config.prompt, &self.completions)? {
                ReadLine::Line(line) => line,
                ReadLine::Interrupted => {
                    log::info!("Input interrupted");
                    return Ok(ExitStatus::Interrupted(self.config.interrupt_status));
                },
                ReadLine::Eof => {
                    log::info!("End of input");
                    return Ok(ExitStatus::EndOfInput);
                },
            };
            if let Some(status) = self.handle_line(&line, out)? {
                log::info!("Shell exiting with status {}", status.code());
                return Ok(status);
            }
        }
    }

    /// Dispatch one line and write its result.
    ///
    /// Returns `Some` when a command asked the loop to stop.
    pub fn handle_line<W>(&self, line: &str, out: &mut W) -> Result<Option<ExitStatus>>
    where
        W: Write + ?Sized,
    {
        match self.registry.execute(line) {
            Ok(CommandOutput::Exit(code)) => return Ok(Some(ExitStatus::Exited(code))),
            Ok(output) => {
                if let Some(text) = output.render() {
                    writeln!(out, "{text}")?;
                }
            },
            Err(e @ ShellError::UnknownCommand(_)) => {
                log::debug!("{e}");
                writeln!(out, "{e}")?;
            },
            Err(e) => {
                log::warn!("Command '{}' failed: {e}", line.trim());
                writeln!(out, "error: {e}")?;
            },
        }
        Ok(None)
    }
}
