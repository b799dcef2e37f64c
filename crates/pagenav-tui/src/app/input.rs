//! Editing state for the jump input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest text the jump input accepts.
const MAX_LEN: usize = 12;

/// Text and cursor of the jump input.
#[derive(Debug, Clone, Default)]
pub struct JumpField {
    buffer: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl JumpField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Empty the field, as a fresh render does.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Handle a key while the field has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => InputResult::Submit,
            (KeyCode::Esc, _) => InputResult::Cancel,

            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at(self.cursor);
                    return InputResult::Changed;
                }
                InputResult::Continue
            }

            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if self.cursor < self.len() {
                    self.remove_at(self.cursor);
                    return InputResult::Changed;
                }
                InputResult::Continue
            }

            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                InputResult::Continue
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.len());
                InputResult::Continue
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                InputResult::Continue
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.len();
                InputResult::Continue
            }

            // Ctrl-U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear();
                InputResult::Changed
            }

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.insert(c) {
                    InputResult::Changed
                } else {
                    InputResult::Continue
                }
            }

            _ => InputResult::Continue,
        }
    }

    /// Insert a character at the cursor. Returns false when the field is full.
    pub fn insert(&mut self, c: char) -> bool {
        if self.len() >= MAX_LEN || c.is_control() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        true
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn remove_at(&mut self, char_index: usize) {
        let at = self.byte_index(char_index);
        if at < self.buffer.len() {
            self.buffer.remove(at);
        }
    }
}

/// Result of handling a key in the jump input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing changed.
    Continue,
    /// The text changed.
    Changed,
    /// Enter was pressed.
    Submit,
    /// The field should lose focus.
    Cancel,
}
