//! Common utilities and types used across the console crates.

pub mod error;
pub mod html;

pub use error::{ConsoleError, ConsoleResult};
pub use html::{escape_html_text, unescape_html_text};
