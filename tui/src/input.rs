//! Text field editing.
//!
//! `TextInput` is the buffer behind each form field: a character vector with
//! a cursor, the usual editing operations, and optional multi-line support
//! for the note text field.

/// An editable text buffer with a cursor.
///
/// The buffer is maintained as a `Vec<char>` so that cursor-based
/// operations work correctly with multi-byte characters. Single-line inputs
/// refuse newlines; multi-line inputs store them as `'\n'`.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: Vec<char>,
    cursor: usize,
    multiline: bool,
}


impl TextInput {
    /// Create an empty single-line input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input that accepts newlines.
    pub fn multiline() -> Self {
        TextInput {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Insert a character at the cursor position.
    ///
    /// Newlines are dropped in single-line inputs.
    pub fn insert(&mut self, ch: char) {
        if ch == '\n' && !self.multiline {
            return;
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert every character of `text` at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor position (forward delete).
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// Move the cursor to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move the cursor to the previous line, keeping the column where the
    /// line is long enough. Returns false on the first line.
    pub fn move_up(&mut self) -> bool {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return false;
        }
        let column = self.cursor - start;
        let prev_start = self.line_start(start - 1);
        let prev_len = (start - 1) - prev_start;
        self.cursor = prev_start + column.min(prev_len);
        true
    }

    /// Move the cursor to the next line. Returns false on the last line.
    pub fn move_down(&mut self) -> bool {
        let end = self.line_end(self.cursor);
        if end >= self.buffer.len() {
            return false;
        }
        let column = self.cursor - self.line_start(self.cursor);
        let next_start = end + 1;
        let next_len = self.line_end(next_start) - next_start;
        self.cursor = next_start + column.min(next_len);
        true
    }

    /// Delete the word before the cursor (Ctrl-W).
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor;
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        self.buffer.drain(self.cursor..end);
    }

    /// Delete from the start of the current line up to the cursor (Ctrl-U).
    pub fn delete_to_line_start(&mut self) {
        let start = self.line_start(self.cursor);
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Clear the entire buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Return the current buffer contents as a String.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Return the current cursor position (character index).
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position as `(line, column)`, both zero-based, in characters.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.buffer[..self.cursor]
            .iter()
            .filter(|c| **c == '\n')
            .count();
        (line, self.cursor - self.line_start(self.cursor))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos]
            .iter()
            .rposition(|c| *c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.buffer[pos..]
            .iter()
            .position(|c| *c == '\n')
            .map(|i| pos + i)
            .unwrap_or(self.buffer.len())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::multiline();
        input.insert_str(text);
        input
    }

    #[test]
    fn delete_to_line_start_keeps_other_lines() {
        let mut input = typed("first\nsecond line");
        input.move_left();
        input.move_left();
        input.delete_to_line_start();
        assert_eq!(input.text(), "first\nne");
        assert_eq!(input.cursor_line_col(), (1, 0));

        input.delete_to_line_start();
        assert_eq!(input.text(), "first\nne");
    }

    #[test]
    fn new_is_empty() {
        let input = TextInput::new();
        assert!(input.is_empty());
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_pos(), 0);
        assert!(!input.is_multiline());
    }

    #[test]
    fn insert_at_cursor() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('c');
        input.move_left();
        input.insert('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn single_line_drops_newlines() {
        let mut input = TextInput::new();
        input.insert_str("a\nb");
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn multiline_keeps_newlines() {
        let input = typed("a\nb");
        assert_eq!(input.text(), "a\nb");
        assert_eq!(input.cursor_line_col(), (1, 1));
    }

    #[test]
    fn delete_back_and_forward() {
        let mut input = typed("abc");
        input.delete_back();
        assert_eq!(input.text(), "ab");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text(), "b");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn delete_back_at_start_is_noop() {
        let mut input = typed("a");
        input.move_home();
        input.delete_back();
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut input = typed("a");
        input.delete_forward();
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn multibyte_characters() {
        let mut input = typed("héllo");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text(), "hélo");
    }

    #[test]
    fn home_and_end_stay_on_current_line() {
        let mut input = typed("first\nsecond");
        input.move_home();
        assert_eq!(input.cursor_line_col(), (1, 0));
        input.move_end();
        assert_eq!(input.cursor_line_col(), (1, 6));
    }

    #[test]
    fn move_up_keeps_column_when_possible() {
        let mut input = typed("abcdef\nxy");
        assert!(input.move_up());
        assert_eq!(input.cursor_line_col(), (0, 2));
        assert!(!input.move_up());
    }

    #[test]
    fn move_up_clamps_to_shorter_line() {
        let mut input = typed("ab\nxyz123");
        input.move_up();
        assert_eq!(input.cursor_line_col(), (0, 2));
    }

    #[test]
    fn move_down_clamps_to_shorter_line() {
        let mut input = typed("abcdef\nxy");
        input.move_up();
        input.move_end();
        assert!(input.move_down());
        assert_eq!(input.cursor_line_col(), (1, 2));
        assert!(!input.move_down());
    }

    #[test]
    fn move_across_empty_line() {
        let mut input = typed("abc\n\nxyz");
        input.move_up();
        assert_eq!(input.cursor_line_col(), (1, 0));
        input.move_up();
        assert_eq!(input.cursor_line_col(), (0, 0));
    }

    #[test]
    fn delete_word_back() {
        let mut input = typed("hello world");
        input.delete_word_back();
        assert_eq!(input.text(), "hello ");
        input.delete_word_back();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn clear_resets() {
        let mut input = typed("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert!(input.is_multiline());
    }
}
