//! Edit-buffer state handed from the line editor to the completion router.
//!
//! The cursor is a byte offset into the text. Offsets that land inside a
//! multi-byte character are moved back to the previous boundary.

/// Snapshot of the line editor's buffer at the time completion is requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    text: String,
    cursor: usize,
}

impl Document {
    /// Create a document with the cursor at byte offset `cursor`.
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self { text, cursor }
    }

    /// Create a document with the cursor after the last character.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// The whole buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    fn line_start(&self) -> usize {
        self.text_before_cursor().rfind('\n').map_or(0, |i| i + 1)
    }

    /// The line containing the cursor, without its newline.
    pub fn current_line(&self) -> &str {
        let start = self.line_start();
        let end = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
        &self.text[start..end]
    }

    /// Zero-based column of the cursor within the current line, in characters.
    pub fn cursor_column(&self) -> usize {
        self.text[self.line_start()..self.cursor].chars().count()
    }

    /// The word immediately before the cursor.
    ///
    /// Empty when the character before the cursor is whitespace.
    pub fn word_before_cursor(&self) -> &str {
        let before = self.text_before_cursor();
        &before[after_last_whitespace(before)..]
    }

    /// The last word before the cursor together with any whitespace that
    /// follows it. A buffer of only whitespace is returned whole.
    pub fn word_before_cursor_with_space(&self) -> &str {
        let before = self.text_before_cursor();
        let end = before.trim_end().len();
        if end == 0 {
            return before;
        }
        &before[after_last_whitespace(&before[..end])..]
    }
}

/// Byte offset just past the last whitespace character, or 0.
fn after_last_whitespace(s: &str) -> usize {
    s.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_before_cursor_mid_word() {
        let doc = Document::at_end("honk f");
        assert_eq!(doc.word_before_cursor(), "f");
        assert_eq!(doc.word_before_cursor_with_space(), "f");
    }

    #[test]
    fn trailing_space_starts_new_word() {
        let doc = Document::at_end("honk ");
        assert_eq!(doc.word_before_cursor(), "");
        assert_eq!(doc.word_before_cursor_with_space(), "honk ");
    }

    #[test]
    fn multiple_trailing_spaces_are_kept() {
        let doc = Document::at_end("honk foo   ");
        assert_eq!(doc.word_before_cursor_with_space(), "foo   ");
    }

    #[test]
    fn whitespace_only_buffer() {
        let doc = Document::at_end("   ");
        assert_eq!(doc.word_before_cursor(), "");
        assert_eq!(doc.word_before_cursor_with_space(), "   ");
    }

    #[test]
    fn empty_buffer() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.word_before_cursor(), "");
        assert_eq!(doc.word_before_cursor_with_space(), "");
        assert_eq!(doc.cursor_column(), 0);
    }

    #[test]
    fn cursor_in_middle_only_sees_text_before() {
        let doc = Document::new("honk foo", 2);
        assert_eq!(doc.text_before_cursor(), "ho");
        assert_eq!(doc.word_before_cursor(), "ho");
        assert_eq!(doc.cursor_column(), 2);
        assert_eq!(doc.current_line(), "honk foo");
    }

    #[test]
    fn cursor_is_clamped() {
        let doc = Document::new("abc", 99);
        assert_eq!(doc.cursor(), 3);
    }

    #[test]
    fn cursor_snaps_to_char_boundary() {
        // 'é' is two bytes; offset 2 is inside it.
        let doc = Document::new("héllo", 2);
        assert_eq!(doc.cursor(), 1);
        assert_eq!(doc.cursor_column(), 1);
    }

    #[test]
    fn column_counts_characters() {
        let doc = Document::at_end("héllo");
        assert_eq!(doc.cursor_column(), 5);
    }

    #[test]
    fn current_line_and_column_on_second_line() {
        let doc = Document::new("first\nsecond line", 9);
        assert_eq!(doc.current_line(), "second line");
        assert_eq!(doc.cursor_column(), 3);
    }

    #[test]
    fn tabs_separate_words() {
        let doc = Document::at_end("honk\tba");
        assert_eq!(doc.word_before_cursor(), "ba");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn word_is_suffix_without_whitespace(text in "[a-z \t]{0,40}", cursor in 0usize..48) {
                let doc = Document::new(text, cursor);
                let word = doc.word_before_cursor();
                prop_assert!(doc.text_before_cursor().ends_with(word));
                prop_assert!(!word.chars().any(char::is_whitespace));
            }

            #[test]
            fn word_with_space_matches_word_mid_word(text in "[a-z ]{0,40}") {
                let doc = Document::at_end(text);
                let with_space = doc.word_before_cursor_with_space();
                prop_assert!(doc.text_before_cursor().ends_with(with_space));
                let word = doc.word_before_cursor();
                if !word.is_empty() {
                    prop_assert_eq!(with_space, word);
                }
            }
        }
    }
}
