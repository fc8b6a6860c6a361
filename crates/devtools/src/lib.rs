//! Page console developer tool.
//!
//! This crate provides the host-independent core of the page console:
//! - Value rendering into escaped, truncated panel lines
//! - Command history with arrow-key recall
//! - Command execution against a host evaluator
//! - The console panel and command box models
//! - Global error hook formatting

pub mod console;
pub mod entry;
pub mod error_hook;
pub mod executor;
pub mod history;
pub mod input;
pub mod panel;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use console::DevConsole;
pub use entry::{Category, LogEntry};
pub use error_hook::{ErrorEvent, ScriptRunner};
pub use executor::{EvalError, Evaluator, RunOutcome};
pub use history::HistoryBuffer;
pub use input::{CommandBox, Key, KeyResponse};
pub use panel::{ConsolePanel, PanelSink, SharedPanel};
pub use render::{RenderOptions, ValueInspector, ValueKind};
