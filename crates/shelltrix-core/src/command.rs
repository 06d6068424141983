//! Command trait, handler outcomes, and a closure-backed command record.

use std::fmt;

use shelltrix_types::Suggestion;
use shelltrix_types::error::Result;

/// Output produced by a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Command produced no visible output.
    None,
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Signal to the shell loop to stop with the given exit status.
    Exit(i32),
}

impl CommandOutput {
    /// Plain text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Render the output as terminal text. Signals and `None` render to nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            CommandOutput::Text(text) => Some(text.clone()),
            CommandOutput::Table { headers, rows } => Some(render_table(headers, rows)),
            CommandOutput::None | CommandOutput::Exit(_) => None,
        }
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).chain([headers.len()]).max();
    let columns = columns.unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut lines = vec![format_row(headers)];
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines.join("\n")
}

/// A single executable command.
///
/// `suggest` and `extra_help` are optional capabilities: the defaults
/// return `None`, meaning the command does not declare them.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help` and completion hints.
    fn description(&self) -> &str;

    /// Alternate names that resolve to this command.
    fn aliases(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Run the command. `args[0]` is the command or alias exactly as typed.
    fn execute(&self, args: &[&str]) -> Result<CommandOutput>;

    /// Completion candidates for the command's arguments, given the last
    /// token on the line.
    fn suggest(&self, _partial: &str) -> Option<Vec<Suggestion>> {
        None
    }

    /// Long-form help. `args[0]` is the command name, followed by whatever
    /// the user typed after it in `help <name> ...`.
    fn extra_help(&self, _args: &[&str]) -> Option<String> {
        None
    }
}

type Handler = Box<dyn Fn(&[&str]) -> Result<CommandOutput>>;
type SecondarySuggester = Box<dyn Fn(&str) -> Vec<Suggestion>>;
type ExtraHelp = Box<dyn Fn(&[&str]) -> String>;

/// A command assembled from closures.
///
/// ```
/// use shelltrix_core::{CommandOutput, FnCommand, Suggestion};
///
/// let honk = FnCommand::new("honk", "The sound a goose makes", |args| {
///     Ok(CommandOutput::text(format!("HONK>>> {args:?}")))
/// })
/// .with_aliases(["blart"])
/// .with_suggester(|_partial| vec![Suggestion::new("foo", ""), Suggestion::new("bar", "")]);
/// ```
pub struct FnCommand {
    name: String,
    description: String,
    aliases: Vec<String>,
    handler: Handler,
    suggester: Option<SecondarySuggester>,
    extra_help: Option<ExtraHelp>,
}

impl FnCommand {
    /// Command named `name` that runs `handler` with the full token list.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl Fn(&[&str]) -> Result<CommandOutput> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            handler: Box::new(handler),
            suggester: None,
            extra_help: None,
        }
    }

    /// Declare aliases. Ones already taken are reported at registration.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Argument suggestions offered once the command name is followed by a space.
    pub fn with_suggester(mut self, suggester: impl Fn(&str) -> Vec<Suggestion> + 'static) -> Self {
        self.suggester = Some(Box::new(suggester));
        self
    }

    /// Text shown by `help <name>`; receives the command name and the rest of the line.
    pub fn with_extra_help(mut self, extra_help: impl Fn(&[&str]) -> String + 'static) -> Self {
        self.extra_help = Some(Box::new(extra_help));
        self
    }
}

impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn aliases(&self) -> Vec<&str> {
        self.aliases.iter().map(String::as_str).collect()
    }

    fn execute(&self, args: &[&str]) -> Result<CommandOutput> {
        (self.handler)(args)
    }

    fn suggest(&self, partial: &str) -> Option<Vec<Suggestion>> {
        self.suggester.as_ref().map(|suggest| suggest(partial))
    }

    fn extra_help(&self, args: &[&str]) -> Option<String> {
        self.extra_help.as_ref().map(|help| help(args))
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("suggester", &self.suggester.is_some())
            .field("extra_help", &self.extra_help.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelltrix_types::ShellError;

    #[test]
    fn fn_command_runs_handler_with_all_tokens() {
        let cmd = FnCommand::new("echo", "Print arguments", |args| {
            Ok(CommandOutput::text(args[1..].join(" ")))
        });
        let out = cmd.execute(&["echo", "hello", "world"]).unwrap();
        assert_eq!(out, CommandOutput::text("hello world"));
    }

    #[test]
    fn fn_command_optional_capabilities_default_to_none() {
        let cmd = FnCommand::new("plain", "No extras", |_| Ok(CommandOutput::None));
        let cmd: &dyn Command = &cmd;
        assert!(cmd.suggest("").is_none());
        assert!(cmd.extra_help(&["plain"]).is_none());
        assert!(cmd.aliases().is_empty());
    }

    #[test]
    fn fn_command_declared_capabilities() {
        let cmd = FnCommand::new("honk", "Goose", |_| Ok(CommandOutput::None))
            .with_aliases(["blart", "squawk"])
            .with_suggester(|partial| vec![Suggestion::new(format!("{partial}!"), "")])
            .with_extra_help(|args| format!("help for {}", args[0]));
        let cmd: &dyn Command = &cmd;
        assert_eq!(cmd.aliases(), vec!["blart", "squawk"]);
        assert_eq!(cmd.suggest("x").unwrap()[0].text, "x!");
        assert_eq!(cmd.extra_help(&["honk"]).unwrap(), "help for honk");
    }

    #[test]
    fn handler_failure_propagates() {
        let cmd = FnCommand::new("fail", "Always fails", |_| {
            Err(ShellError::command("nope"))
        });
        assert!(cmd.execute(&["fail"]).is_err());
    }

    #[test]
    fn debug_hides_closures() {
        let cmd = FnCommand::new("honk", "Goose", |_| Ok(CommandOutput::None));
        let dbg = format!("{cmd:?}");
        assert!(dbg.contains("honk"));
        assert!(dbg.contains("suggester: false"));
    }

    #[test]
    fn render_text_and_signals() {
        assert_eq!(CommandOutput::text("hi").render().as_deref(), Some("hi"));
        assert!(CommandOutput::None.render().is_none());
        assert!(CommandOutput::Exit(0).render().is_none());
    }

    #[test]
    fn render_table_aligns_columns() {
        let out = CommandOutput::Table {
            headers: vec!["NAME".into(), "SIZE".into()],
            rows: vec![
                vec!["a".into(), "1".into()],
                vec!["longer".into(), "22".into()],
            ],
        };
        assert_eq!(
            out.render().unwrap(),
            "NAME    SIZE\na       1\nlonger  22"
        );
    }
}
