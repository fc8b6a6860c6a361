//! Console configuration.

use common::{ConsoleError, ConsoleResult};
use devtools::render::{RenderOptions, JSON_INDENT, MAX_STRING_LEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Console configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Strings longer than this many UTF-16 code units are truncated.
    pub max_string_len: usize,
    /// Indentation of serialized values.
    pub json_indent: usize,
    /// Whether entries are printed to the terminal as they are appended.
    pub echo: bool,
    /// Prompt shown before each command.
    pub prompt: String,
    /// Where to write the panel markup on exit.
    pub html_output: Option<PathBuf>,
}

impl ConsoleConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConsoleResult<Self> {
        serde_json::from_str(json).map_err(|e| ConsoleError::config(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the string truncation length.
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    /// Set terminal echo.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Set the HTML output path.
    pub fn with_html_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_output = Some(path.into());
        self
    }

    /// Options for the value renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_max_string_len(self.max_string_len)
            .with_json_indent(self.json_indent)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_string_len: MAX_STRING_LEN,
            json_indent: JSON_INDENT,
            echo: true,
            prompt: "> ".to_string(),
            html_output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.max_string_len, 300);
        assert_eq!(config.json_indent, 2);
        assert!(config.echo);
        assert!(config.html_output.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ConsoleConfig::new()
            .with_max_string_len(80)
            .with_echo(false)
            .with_html_output("console.html");

        assert_eq!(config.max_string_len, 80);
        assert!(!config.echo);
        assert_eq!(config.html_output, Some(PathBuf::from("console.html")));
        assert_eq!(config.render_options().max_string_len, 80);
    }

    #[test]
    fn test_partial_json() {
        let config = ConsoleConfig::from_json(r#"{ "max_string_len": 50, "prompt": "js> " }"#).unwrap();
        assert_eq!(config.max_string_len, 50);
        assert_eq!(config.prompt, "js> ");
        assert_eq!(config.json_indent, 2);
        assert!(config.echo);
    }

    #[test]
    fn test_invalid_json() {
        let err = ConsoleConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ConsoleConfig::from_file(Path::new("/nonexistent/oxide-console.json")).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
