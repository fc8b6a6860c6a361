//! Global error hook.

use crate::entry::{Category, LogEntry};
use crate::executor::Evaluator;
use crate::render::{render_text, RenderOptions};

/// Prefix of entries produced by uncaught script errors.
pub const ERROR_PREFIX: &str = "Javascript Error:";

/// An uncaught error reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEvent {
    pub message: String,
    /// Script URL or name the error originated from.
    pub source: String,
    pub line: u32,
    pub col: u32,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>, source: impl Into<String>, line: u32, col: u32) -> Self {
        Self {
            message: message.into(),
            source: source.into(),
            line,
            col,
        }
    }

    /// One-sentence description with the source location.
    pub fn describe(&self) -> String {
        format!(
            "{} in {}, line {}, col {}.",
            self.message, self.source, self.line, self.col
        )
    }

    /// Panel entry for this error.
    pub fn to_entry(&self, options: &RenderOptions) -> LogEntry {
        LogEntry::new(
            Category::Error,
            Some(ERROR_PREFIX.to_string()),
            vec![render_text(&self.describe(), options)],
        )
    }
}

/// Host capability to run a whole page script outside the command box.
///
/// Errors escaping the script are reported as [`ErrorEvent`]s.
pub trait ScriptRunner: Evaluator {
    fn run_script(&mut self, source: &str, name: &str) -> Result<(), ErrorEvent>;
}
