//! Oxide Console - a page console for the Oxide JavaScript engine.
//!
//! This crate wires the console together for the command line:
//! - Configuration
//! - Terminal echo of panel entries
//! - A line-based command box with history recall

pub mod config;
pub mod repl;
pub mod terminal;

pub use config::ConsoleConfig;
pub use repl::{Repl, ReplAction};
pub use terminal::TerminalPanel;

/// Console version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
