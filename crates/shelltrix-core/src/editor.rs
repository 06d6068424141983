//! [`LineEditor`] backed by rustyline.
//!
//! The helper runs the completion router from `Hinter::hint`, which
//! rustyline calls after every edit, so the router sees each keystroke.
//! Tab completion reads the same router and replaces the word before the
//! cursor. History lives only as long as the editor.

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use shelltrix_types::error::{Result, ShellError};
use shelltrix_types::{Document, ShellConfig, Suggestion};

use crate::completion::Completions;
use crate::shell::{LineEditor, ReadLine};

/// Interactive terminal editor.
pub struct RustylineEditor {
    editor: Editor<ShellHelper, DefaultHistory>,
    show_hints: bool,
}

impl RustylineEditor {
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let editor = Editor::new().map_err(|e| ShellError::Editor(e.to_string()))?;
        Ok(Self {
            editor,
            show_hints: config.show_hints,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str, completions: &Completions) -> Result<ReadLine> {
        self.editor.set_helper(Some(ShellHelper {
            completions: completions.clone(),
            show_hints: self.show_hints,
        }));
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::debug!("History entry dropped: {e}");
                    }
                }
                Ok(ReadLine::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::Eof),
            Err(e) => Err(ShellError::Editor(e.to_string())),
        }
    }
}

struct ShellHelper {
    completions: Completions,
    show_hints: bool,
}

impl ShellHelper {
    fn candidate(suggestion: Suggestion) -> Pair {
        let display = if suggestion.description.is_empty() {
            suggestion.text.clone()
        } else {
            format!("{}  -- {}", suggestion.text, suggestion.description)
        };
        Pair {
            display,
            replacement: suggestion.text,
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let doc = Document::new(line, pos);
        let start = doc.cursor() - doc.word_before_cursor().len();
        let candidates = self
            .completions
            .complete(&doc)
            .into_iter()
            .map(Self::candidate)
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let doc = Document::new(line, pos);
        let suggestions = self.completions.complete(&doc);
        if !self.show_hints || pos < line.len() {
            return None;
        }
        inline_hint(doc.word_before_cursor(), &suggestions)
    }
}

/// Remainder of the first suggestion after the typed word.
fn inline_hint(word: &str, suggestions: &[Suggestion]) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    let first = suggestions.first()?;
    let rest: String = first.text.chars().skip(word.chars().count()).collect();
    if rest.is_empty() { None } else { Some(rest) }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
