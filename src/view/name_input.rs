//! Inline name input of the "new node" form
//!
//! Holds the typed name and a byte-offset cursor that always sits on a
//! grapheme boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Events that can be returned from name input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInputEvent {
    /// Text was changed
    Changed(String),
    /// Cursor moved without changing the text
    Moved,
    /// Enter pressed
    Submitted(String),
    /// Escape pressed
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct NameInputState {
    pub value: String,
    /// Byte offset into `value`
    pub cursor: usize,
}

impl NameInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
            .unwrap_or(self.value.len())
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_boundary();
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = self.next_boundary();
        self.value.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Display columns between the start of the value and the cursor
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].width()
    }

    /// Handle a keyboard event for the input
    ///
    /// # Returns
    /// * `Some(NameInputEvent)` if the event was consumed
    /// * `None` if the event was not relevant
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NameInputEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && !matches!(key.code, KeyCode::Left | KeyCode::Right) {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(NameInputEvent::Submitted(self.value.clone())),
            KeyCode::Esc => Some(NameInputEvent::Cancelled),
            KeyCode::Backspace => {
                self.backspace();
                Some(NameInputEvent::Changed(self.value.clone()))
            }
            KeyCode::Delete => {
                self.delete();
                Some(NameInputEvent::Changed(self.value.clone()))
            }
            KeyCode::Left => {
                if ctrl {
                    self.move_home();
                } else {
                    self.move_left();
                }
                Some(NameInputEvent::Moved)
            }
            KeyCode::Right => {
                if ctrl {
                    self.move_end();
                } else {
                    self.move_right();
                }
                Some(NameInputEvent::Moved)
            }
            KeyCode::Home => {
                self.move_home();
                Some(NameInputEvent::Moved)
            }
            KeyCode::End => {
                self.move_end();
                Some(NameInputEvent::Moved)
            }
            KeyCode::Char(c) => {
                self.insert(c);
                Some(NameInputEvent::Changed(self.value.clone()))
            }
            _ => None,
        }
    }
}
