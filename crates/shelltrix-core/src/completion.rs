//! Context-sensitive completion.
//!
//! The router keeps an "active" suggestion set and switches it based on the
//! edit buffer:
//!
//! - a word was just finished with whitespace: ask the root command's
//!   secondary suggester once and make its answer active (or nothing, if the
//!   root has no suggester);
//! - the cursor is back at the start of the line: make the top-level list
//!   active again;
//! - anything else: keep whatever is active.
//!
//! Every call then prefix-filters the active set by the word before the
//! cursor, so the per-keystroke cost is a filter and nothing else.

use std::cell::RefCell;
use std::rc::Rc;

use shelltrix_types::suggest::filter_has_prefix;
use shelltrix_types::{Document, Suggestion};

use crate::registry::CommandRegistry;

/// Which suggestion list the router is currently offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// Command names, aliases, and help words.
    TopLevel,
    /// Arguments of `root`, as reported by its secondary suggester.
    Delegated { root: String },
}

#[derive(Debug, Clone)]
enum ActiveSet {
    TopLevel,
    Delegated {
        root: String,
        suggestions: Vec<Suggestion>,
    },
}

/// Completion state machine for one shell session.
#[derive(Debug, Clone)]
pub struct CompletionRouter {
    active: ActiveSet,
    ignore_case: bool,
}

impl CompletionRouter {
    /// Router starting at the top level.
    pub fn new(ignore_case: bool) -> Self {
        Self {
            active: ActiveSet::TopLevel,
            ignore_case,
        }
    }

    /// Back to the top-level list. Called at the start of every input line.
    pub fn reset(&mut self) {
        self.active = ActiveSet::TopLevel;
    }

    /// Which list is active.
    pub fn state(&self) -> RouterState {
        match &self.active {
            ActiveSet::TopLevel => RouterState::TopLevel,
            ActiveSet::Delegated { root, .. } => RouterState::Delegated { root: root.clone() },
        }
    }

    /// Update the active set for `doc` and return its filtered contents.
    pub fn complete(&mut self, registry: &CommandRegistry, doc: &Document) -> Vec<Suggestion> {
        if doc.is_empty() {
            return Vec::new();
        }

        if doc.word_before_cursor().is_empty() && !doc.word_before_cursor_with_space().is_empty() {
            self.delegate(registry, doc.current_line());
        } else if doc.cursor_column() <= 1 {
            if !matches!(self.active, ActiveSet::TopLevel) {
                log::debug!("Completion back to top level");
            }
            self.active = ActiveSet::TopLevel;
        }

        let active = match &self.active {
            ActiveSet::TopLevel => registry.suggestions(),
            ActiveSet::Delegated { suggestions, .. } => suggestions.as_slice(),
        };
        filter_has_prefix(active, doc.word_before_cursor(), self.ignore_case)
    }

    fn delegate(&mut self, registry: &CommandRegistry, line: &str) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(root), Some(last)) = (words.first(), words.last()) else {
            self.active = ActiveSet::Delegated {
                root: String::new(),
                suggestions: Vec::new(),
            };
            return;
        };

        let suggestions = registry
            .resolve(root)
            .and_then(|resolved| resolved.command.suggest(last))
            .unwrap_or_default();
        log::debug!(
            "Completion delegated to '{root}' with {} suggestion(s)",
            suggestions.len()
        );
        self.active = ActiveSet::Delegated {
            root: root.to_string(),
            suggestions,
        };
    }
}

impl Default for CompletionRouter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Shared completion handle given to the line editor.
///
/// Cheap to clone; every clone drives the same router.
#[derive(Clone)]
pub struct Completions {
    registry: Rc<CommandRegistry>,
    router: Rc<RefCell<CompletionRouter>>,
}

impl Completions {
    /// Wrap `router` for sharing with the line editor.
    pub fn new(registry: Rc<CommandRegistry>, router: CompletionRouter) -> Self {
        Self {
            registry,
            router: Rc::new(RefCell::new(router)),
        }
    }

    /// Suggestions for the current edit buffer.
    pub fn complete(&self, doc: &Document) -> Vec<Suggestion> {
        self.router.borrow_mut().complete(&self.registry, doc)
    }

    /// Back to the top-level list.
    pub fn reset(&self) {
        self.router.borrow_mut().reset();
    }

    /// Which list the shared router has active.
    pub fn state(&self) -> RouterState {
        self.router.borrow().state()
    }
}
