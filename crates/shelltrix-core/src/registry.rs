//! Command and alias registry.
//!
//! The registry owns three command tables: builtins (seeded once at
//! construction), host-added commands, and the union of both that every
//! lookup goes through. Aliases map to a canonical command name and are
//! bound first-writer-wins. The top-level suggestion list and the help
//! column hints are derived from the tables and rebuilt from scratch after
//! every registration.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use shelltrix_types::Suggestion;

use crate::builtins;
use crate::command::Command;
use crate::help::{self, HelpHints};

/// Why an alias was not bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasConflictReason {
    /// The alias already resolves to another command.
    BoundTo(String),
    /// A command with that exact name exists, and names always win.
    ShadowedByCommand,
    /// `help` and `?` cannot be aliases.
    Reserved,
}

/// An alias rejected during registration. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    pub alias: String,
    /// The command that asked for the alias.
    pub command: String,
    pub reason: AliasConflictReason,
}

impl fmt::Display for AliasConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alias '{}' for '{}' ignored: ", self.alias, self.command)?;
        match &self.reason {
            AliasConflictReason::BoundTo(owner) => write!(f, "already an alias for '{owner}'"),
            AliasConflictReason::ShadowedByCommand => f.write_str("a command has that name"),
            AliasConflictReason::Reserved => f.write_str("reserved word"),
        }
    }
}

/// A token resolved against the registry.
#[derive(Clone, Copy)]
pub struct Resolution<'a> {
    pub command: &'a dyn Command,
    /// `true` when the token matched an alias rather than a command name.
    pub via_alias: bool,
}

/// Registry of commands and aliases with derived completion/help data.
///
/// Not thread-safe: populate it during setup, then hand it to
/// [`Shell::new`](crate::Shell::new), which takes ownership so nothing can
/// register commands while the input loop runs.
pub struct CommandRegistry {
    builtins: HashMap<String, Rc<dyn Command>>,
    ext: HashMap<String, Rc<dyn Command>>,
    all: HashMap<String, Rc<dyn Command>>,
    aliases: HashMap<String, String>,
    suggestions: Vec<Suggestion>,
    hints: HelpHints,
}

impl CommandRegistry {
    /// Create a registry seeded with the builtin commands (`exit`/`quit`).
    pub fn new() -> Self {
        let mut reg = Self::empty();
        for cmd in builtins::builtin_commands() {
            let cmd: Rc<dyn Command> = Rc::from(cmd);
            reg.builtins.insert(cmd.name().to_string(), Rc::clone(&cmd));
            for conflict in reg.bind(cmd) {
                log::warn!("{conflict}");
            }
        }
        reg.rebuild();
        reg
    }

    /// Create a registry with no commands at all.
    pub fn empty() -> Self {
        let mut reg = Self {
            builtins: HashMap::new(),
            ext: HashMap::new(),
            all: HashMap::new(),
            aliases: HashMap::new(),
            suggestions: Vec::new(),
            hints: HelpHints::default(),
        };
        reg.rebuild();
        reg
    }

    /// Register a command.
    ///
    /// Replaces any existing command with the same name. Each declared alias
    /// is bound unless it is already taken; rejected aliases are logged and
    /// returned.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Vec<AliasConflict> {
        let cmd: Rc<dyn Command> = Rc::from(cmd);
        let name = cmd.name().to_string();
        if self.all.contains_key(&name) {
            log::info!("Replacing command '{name}'");
        }
        if let Some(owner) = self.aliases.get(&name) {
            log::warn!("Command '{name}' shadows an alias for '{owner}'");
        }
        self.ext.insert(name.clone(), Rc::clone(&cmd));
        let conflicts = self.bind(cmd);
        for conflict in &conflicts {
            log::warn!("{conflict}");
        }
        self.rebuild();
        log::debug!("Registered command '{name}' ({} total)", self.all.len());
        conflicts
    }

    /// Insert into the unified table and bind aliases.
    fn bind(&mut self, cmd: Rc<dyn Command>) -> Vec<AliasConflict> {
        let name = cmd.name().to_string();
        let mut conflicts = Vec::new();
        for alias in cmd.aliases() {
            if alias == name {
                continue;
            }
            let reason = if help::is_help_word(alias) {
                Some(AliasConflictReason::Reserved)
            } else if self.all.contains_key(alias) {
                Some(AliasConflictReason::ShadowedByCommand)
            } else {
                match self.aliases.get(alias) {
                    Some(owner) if *owner != name => {
                        Some(AliasConflictReason::BoundTo(owner.clone()))
                    },
                    Some(_) => None,
                    None => {
                        self.aliases.insert(alias.to_string(), name.clone());
                        None
                    },
                }
            };
            if let Some(reason) = reason {
                conflicts.push(AliasConflict {
                    alias: alias.to_string(),
                    command: name.clone(),
                    reason,
                });
            }
        }
        self.all.insert(name, cmd);
        conflicts
    }

    /// Recompute the suggestion index and help hints from scratch.
    fn rebuild(&mut self) {
        self.suggestions = self.build_suggestions();
        self.hints = HelpHints::compute(self.all.values().map(as_command));
    }

    fn build_suggestions(&self) -> Vec<Suggestion> {
        let mut out: Vec<Suggestion> = self
            .commands()
            .into_iter()
            .map(|c| Suggestion::new(c.name(), c.description()))
            .collect();

        let mut aliases: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .filter(|(alias, _)| !self.all.contains_key(alias.as_str()))
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
            .collect();
        aliases.sort_unstable();
        for (alias, target) in aliases {
            let desc = self.all.get(target).map_or("", |c| c.description());
            out.push(Suggestion::new(alias, format!("alias for {target}: {desc}")));
        }

        for (word, desc) in help::META_ENTRIES {
            if !self.all.contains_key(word) {
                out.push(Suggestion::new(word, desc));
            }
        }
        out
    }

    /// Look up a command by exact name.
    pub fn lookup_command(&self, name: &str) -> Option<&dyn Command> {
        self.all.get(name).map(as_command)
    }

    /// Look up the command an alias is bound to.
    pub fn lookup_alias(&self, alias: &str) -> Option<&dyn Command> {
        self.aliases
            .get(alias)
            .and_then(|target| self.lookup_command(target))
    }

    /// Resolve a token: command names first, aliases second.
    pub fn resolve(&self, token: &str) -> Option<Resolution<'_>> {
        if let Some(command) = self.lookup_command(token) {
            return Some(Resolution {
                command,
                via_alias: false,
            });
        }
        self.lookup_alias(token).map(|command| Resolution {
            command,
            via_alias: true,
        })
    }

    /// Canonical command name an alias points at.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Aliases bound to `name`: the ones it declares first, in declared
    /// order, then any left over from an earlier definition, sorted.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut bound: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(alias, target)| *target == name && !self.all.contains_key(alias.as_str()))
            .map(|(alias, _)| alias.as_str())
            .collect();
        bound.sort_unstable();
        let declared = self.all.get(name).map(|cmd| cmd.aliases()).unwrap_or_default();
        let rank = |alias: &str| declared.iter().position(|d| *d == alias).unwrap_or(usize::MAX);
        bound.sort_by_key(|alias| rank(alias));
        bound
    }

    /// All commands, sorted by name.
    pub fn commands(&self) -> Vec<&dyn Command> {
        let mut cmds: Vec<&dyn Command> = self.all.values().map(as_command).collect();
        cmds.sort_by(|a, b| a.name().cmp(b.name()));
        cmds
    }

    /// Names of the builtin commands, sorted.
    pub fn builtin_names(&self) -> Vec<&str> {
        sorted_keys(&self.builtins)
    }

    /// Names of host-registered commands, sorted.
    pub fn ext_names(&self) -> Vec<&str> {
        sorted_keys(&self.ext)
    }

    /// Cached top-level completion candidates.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Column widths for the help listing.
    pub fn help_hints(&self) -> HelpHints {
        self.hints
    }

    /// Number of commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// `true` when no commands are registered, builtins included.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

fn as_command(cmd: &Rc<dyn Command>) -> &dyn Command {
    cmd.as_ref()
}

fn sorted_keys(map: &HashMap<String, Rc<dyn Command>>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
