//! Text entry for the analyzer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press meant to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Edited,
    Ignored,
}

/// Multi-line input buffer; the cursor is always at the end
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    text: String,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert('\n');
                FormAction::Edited
            }
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert('\n');
                FormAction::Edited
            }
            KeyCode::Enter => FormAction::Submit,
            KeyCode::Backspace => {
                self.backspace();
                FormAction::Edited
            }
            KeyCode::Esc => {
                self.clear();
                FormAction::Edited
            }
            KeyCode::Tab => {
                self.insert('\t');
                FormAction::Edited
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
                FormAction::Edited
            }
            _ => FormAction::Ignored,
        }
    }
}
