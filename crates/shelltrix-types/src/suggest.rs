//! Completion suggestions and prefix filtering.

use std::fmt;

/// A single completion candidate offered to the line editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    /// Text inserted when the suggestion is accepted.
    pub text: String,
    /// Short hint shown next to the text.
    pub description: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            f.write_str(&self.text)
        } else {
            write!(f, "{} - {}", self.text, self.description)
        }
    }
}

/// Keep the suggestions whose text starts with `prefix`, preserving order.
///
/// An empty prefix keeps everything.
pub fn filter_has_prefix(
    suggestions: &[Suggestion],
    prefix: &str,
    ignore_case: bool,
) -> Vec<Suggestion> {
    if prefix.is_empty() {
        return suggestions.to_vec();
    }
    if ignore_case {
        let prefix = prefix.to_lowercase();
        suggestions
            .iter()
            .filter(|s| s.text.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    } else {
        suggestions
            .iter()
            .filter(|s| s.text.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Suggestion> {
        vec![
            Suggestion::new("foo", "A foo"),
            Suggestion::new("bar", "qux baz"),
            Suggestion::new("Food", ""),
        ]
    }

    #[test]
    fn empty_prefix_keeps_all_in_order() {
        let out = filter_has_prefix(&sample(), "", true);
        assert_eq!(out, sample());
    }

    #[test]
    fn case_insensitive_prefix() {
        let out = filter_has_prefix(&sample(), "FO", true);
        let texts: Vec<&str> = out.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["foo", "Food"]);
    }

    #[test]
    fn case_sensitive_prefix() {
        let out = filter_has_prefix(&sample(), "Fo", false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Food");
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_has_prefix(&sample(), "zzz", true).is_empty());
    }

    #[test]
    fn display_with_and_without_description() {
        assert_eq!(Suggestion::new("foo", "A foo").to_string(), "foo - A foo");
        assert_eq!(Suggestion::new("foo", "").to_string(), "foo");
    }
}
