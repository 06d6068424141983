//! Line dispatch: tokenize, resolve, invoke.

use shelltrix_types::error::{Result, ShellError};

use crate::command::CommandOutput;
use crate::help;
use crate::registry::CommandRegistry;

/// Split a submitted line on whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

impl CommandRegistry {
    /// Parse and execute a submitted line.
    ///
    /// Resolution order for the first token: command name, then the help
    /// words, then aliases. Handlers receive every token, with the first one
    /// exactly as typed (an alias is not rewritten to its command's name).
    pub fn execute(&self, line: &str) -> Result<CommandOutput> {
        let tokens = tokenize(line);
        let Some(&first) = tokens.first() else {
            return Ok(CommandOutput::None);
        };

        if let Some(cmd) = self.lookup_command(first) {
            log::debug!("Dispatching '{first}'");
            return cmd.execute(&tokens);
        }
        if help::is_help_word(first) {
            return Ok(CommandOutput::Text(help::render_help(self, &tokens)));
        }
        if let Some(cmd) = self.lookup_alias(first) {
            log::debug!("Dispatching alias '{first}' to '{}'", cmd.name());
            return cmd.execute(&tokens);
        }
        Err(ShellError::UnknownCommand(first.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::command::FnCommand;

    fn recording(name: &str, aliases: &[&str], seen: &Rc<RefCell<Vec<Vec<String>>>>) -> FnCommand {
        let seen = Rc::clone(seen);
        let aliases: Vec<String> = aliases.iter().map(|a| a.to_string()).collect();
        FnCommand::new(name, format!("{name} command"), move |args| {
            seen.borrow_mut()
                .push(args.iter().map(|a| a.to_string()).collect());
            Ok(CommandOutput::None)
        })
        .with_aliases(aliases)
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  honk \t foo  bar "), vec!["honk", "foo", "bar"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn command_receives_full_tokens() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(recording("honk", &["blart"], &seen)));
        reg.execute("honk foo bar").unwrap();
        assert_eq!(*seen.borrow(), vec![vec!["honk", "foo", "bar"]]);
    }

    #[test]
    fn alias_text_is_preserved() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(recording("honk", &["blart"], &seen)));
        reg.execute("blart arg1").unwrap();
        assert_eq!(*seen.borrow(), vec![vec!["blart", "arg1"]]);
    }

    #[test]
    fn empty_and_whitespace_lines_do_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(recording("honk", &[], &seen)));
        assert_eq!(reg.execute("").unwrap(), CommandOutput::None);
        assert_eq!(reg.execute(" \t  ").unwrap(), CommandOutput::None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unknown_command_names_token() {
        let reg = CommandRegistry::new();
        match reg.execute("frobnicate now") {
            Err(ShellError::UnknownCommand(tok)) => assert_eq!(tok, "frobnicate"),
            other => panic!("expected unknown command, got {other:?}"),
        }
    }

    #[test]
    fn help_words_render_help() {
        let reg = CommandRegistry::new();
        for line in ["help", "?", "  help  "] {
            match reg.execute(line).unwrap() {
                CommandOutput::Text(text) => assert!(text.starts_with("Commands:")),
                other => panic!("expected help text, got {other:?}"),
            }
        }
    }

    #[test]
    fn help_with_target() {
        let reg = CommandRegistry::new();
        match reg.execute("help quit").unwrap() {
            CommandOutput::Text(text) => {
                assert!(text.starts_with("'quit' is an alias for 'exit'."));
            },
            other => panic!("expected help text, got {other:?}"),
        }
    }

    #[test]
    fn command_named_help_wins_over_builtin_help() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(recording("help", &[], &seen)));
        assert_eq!(reg.execute("help me").unwrap(), CommandOutput::None);
        assert_eq!(*seen.borrow(), vec![vec!["help", "me"]]);
    }

    #[test]
    fn exit_and_quit_signal_exit() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.execute("exit").unwrap(), CommandOutput::Exit(0));
        assert_eq!(reg.execute("quit").unwrap(), CommandOutput::Exit(0));
    }

    #[test]
    fn handler_error_is_returned() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(FnCommand::new("fail", "Fails", |args| {
            Err(ShellError::command(format!("{} exploded", args[0])))
        })));
        let err = reg.execute("fail").unwrap_err();
        assert_eq!(err.to_string(), "command error: fail exploded");
    }

    #[test]
    fn dispatch_is_case_sensitive() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.execute("EXIT"),
            Err(ShellError::UnknownCommand(_))
        ));
    }
}
