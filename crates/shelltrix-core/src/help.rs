//! Help text rendering.
//!
//! `help` lists every command in aligned columns. `help <name> ...` shows a
//! command's extended help, following an alias at most one hop to its
//! canonical command.

use crate::command::Command;
use crate::registry::CommandRegistry;

/// Reserved words that open help instead of running a command.
pub const HELP_WORDS: [&str; 2] = ["help", "?"];

/// Top-level completion entries for the reserved help words.
pub(crate) const META_ENTRIES: [(&str, &str); 2] = [
    ("?", "Type 'help' to list commands"),
    ("help", "List commands and what they do"),
];

const META_LABEL: &str = "help, ?";

const HELP_ON_HELP: &str = "help [command] [args...]\n  \
    Without arguments: list all commands.\n  \
    With a command name: show that command's extended help.\n  \
    '?' is the same as 'help'.";

/// `true` for `help` and `?`.
pub fn is_help_word(token: &str) -> bool {
    HELP_WORDS.contains(&token)
}

/// Column widths for the help listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpHints {
    /// Longest command name, in characters.
    pub longest_command: usize,
    /// Longest description, in characters.
    pub longest_description: usize,
}

impl HelpHints {
    /// Widest name and description across `commands`.
    pub fn compute<'a>(commands: impl IntoIterator<Item = &'a dyn Command>) -> Self {
        commands
            .into_iter()
            .fold(Self::default(), |hints, cmd| Self {
                longest_command: hints.longest_command.max(cmd.name().chars().count()),
                longest_description: hints
                    .longest_description
                    .max(cmd.description().chars().count()),
            })
    }
}

/// Render help for a `help`/`?` line. `args[0]` is the help word itself.
pub fn render_help(registry: &CommandRegistry, args: &[&str]) -> String {
    match args.get(1) {
        None => render_listing(registry),
        Some(name) => {
            let mut out = String::new();
            render_command_help(registry, name, &args[2..], false, &mut out);
            out
        },
    }
}

fn render_listing(registry: &CommandRegistry) -> String {
    let hints = registry.help_hints();
    let name_w = hints.longest_command.max(META_LABEL.len());
    let desc_w = hints.longest_description;

    let mut lines = vec!["Commands:".to_string()];
    for cmd in registry.commands() {
        let aliases = registry.aliases_of(cmd.name());
        if aliases.is_empty() {
            lines.push(format!("  {:<name_w$}  {}", cmd.name(), cmd.description()));
        } else {
            lines.push(format!(
                "  {:<name_w$}  {:<desc_w$}  (aliases: {})",
                cmd.name(),
                cmd.description(),
                aliases.join(", ")
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "  {META_LABEL:<name_w$}  List commands, or 'help <command>' for details"
    ));
    lines.join("\n")
}

fn render_command_help(
    registry: &CommandRegistry,
    name: &str,
    rest: &[&str],
    redirected: bool,
    out: &mut String,
) {
    let Some(cmd) = registry.lookup_command(name) else {
        // Aliases always target command names, so one redirect is enough.
        if !redirected && let Some(target) = registry.alias_target(name) {
            out.push_str(&format!("'{name}' is an alias for '{target}'.\n"));
            render_command_help(registry, target, rest, true, out);
            return;
        }
        if is_help_word(name) {
            out.push_str(HELP_ON_HELP);
        } else {
            out.push_str(&format!("Don't know the command '{name}'."));
        }
        return;
    };

    let mut tokens = vec![cmd.name()];
    tokens.extend_from_slice(rest);
    match cmd.extra_help(&tokens) {
        Some(text) => out.push_str(&text),
        None => out.push_str(&format!(
            "{}: {}\nNo more help available for '{}'.",
            cmd.name(),
            cmd.description(),
            cmd.name()
        )),
    }
}
