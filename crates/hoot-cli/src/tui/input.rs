//! Chat input editor
//!
//! Single-line buffer: printable characters, backspace, Enter to submit.

use crossterm::event::{KeyCode, KeyModifiers};

const INPUT_MAX: usize = 500;

/// Result of handling a key in the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key was consumed, keep editing
    Continue,
    /// User submitted the line (Enter pressed)
    Submit,
}

/// Chat input state
#[derive(Debug, Default)]
pub struct InputEditor {
    buffer: String,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Handle a key event; submission leaves the buffer untouched so the
    /// caller can read it before clearing.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> InputAction {
        match code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Backspace => {
                self.buffer.pop();
                InputAction::Continue
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if self.buffer.len() < INPUT_MAX {
                    self.buffer.push(c);
                }
                InputAction::Continue
            }
            _ => InputAction::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_appends() {
        let mut editor = InputEditor::new();
        editor.handle_key(KeyCode::Char('g'), KeyModifiers::empty());
        editor.handle_key(KeyCode::Char('m'), KeyModifiers::empty());
        assert_eq!(editor.buffer(), "gm");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut editor = InputEditor::new();
        editor.handle_key(KeyCode::Char('h'), KeyModifiers::empty());
        editor.handle_key(KeyCode::Char('i'), KeyModifiers::empty());
        editor.handle_key(KeyCode::Backspace, KeyModifiers::empty());
        assert_eq!(editor.buffer(), "h");
    }

    #[test]
    fn test_enter_submits_and_keeps_buffer() {
        let mut editor = InputEditor::new();
        editor.handle_key(KeyCode::Char('x'), KeyModifiers::empty());
        let action = editor.handle_key(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(action, InputAction::Submit);
        assert_eq!(editor.buffer(), "x");
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let mut editor = InputEditor::new();
        editor.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(editor.buffer(), "");
    }
}
