//! Command box.

use crate::history::HistoryBuffer;

/// Keys the command box reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Other,
}

/// What the caller should do with the key event after the box handled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Suppress the default caret movement.
    pub prevent_default: bool,
}

/// Text field the user types commands into.
#[derive(Clone, Debug, Default)]
pub struct CommandBox {
    value: String,
}

impl CommandBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Take the current text, leaving the box empty.
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Handle a key press, recalling history for the arrow keys.
    pub fn key_down(&mut self, key: Key, history: &mut HistoryBuffer) -> KeyResponse {
        match key {
            Key::ArrowUp => {
                // Keep an unsubmitted command so ArrowDown can bring it back.
                if !self.value.is_empty() && !history.is_recalling() {
                    history.push(self.value.clone());
                }
                self.value = history.get_prev().to_string();
                KeyResponse {
                    prevent_default: true,
                }
            }
            Key::ArrowDown => {
                self.value = history.get_next().to_string();
                KeyResponse::default()
            }
            Key::Other => KeyResponse::default(),
        }
    }
}
