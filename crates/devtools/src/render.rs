//! Value rendering.
//!
//! Converts host values into the text lines of a [`LogEntry`]. The rules are
//! applied in order:
//!
//! 1. `null` renders as `null`.
//! 2. Strings are escaped and truncated to [`RenderOptions::max_string_len`]
//!    UTF-16 code units, with `...` appended when cut.
//! 3. Callables render as their escaped source text.
//! 4. Plain objects are first expanded into a snapshot of their enumerable
//!    properties, then serialized like any other value.
//! 5. Everything else is serialized with the host's structured serializer.
//!    A serialization failure renders as `Error: <message>`, unescaped.

use crate::entry::{Category, LogEntry};
use crate::panel::SharedPanel;
use common::escape_html_text;

/// Default truncation length for strings, in UTF-16 code units.
pub const MAX_STRING_LEN: usize = 300;

/// Default indentation of serialized values.
pub const JSON_INDENT: usize = 2;

/// Appended to strings cut at the truncation length.
const ELLIPSIS: &str = "...";

/// Rendering options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Strings longer than this many UTF-16 code units are truncated.
    pub max_string_len: usize,
    /// Indentation passed to the structured serializer.
    pub json_indent: usize,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_string_len: MAX_STRING_LEN,
            json_indent: JSON_INDENT,
        }
    }
}

/// Basic classification of a host value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    /// A string, with its text.
    String(String),
    /// A callable, with its source text.
    Function(String),
    /// An object that is not an array or callable.
    PlainObject,
    Other,
}

/// Host capability for looking into values it produced.
pub trait ValueInspector {
    type Value;

    /// Classify a value.
    fn inspect(&mut self, value: &Self::Value) -> ValueKind;

    /// Shallow key/value copy of every enumerable property of an object.
    fn snapshot(&mut self, value: &Self::Value) -> Result<Self::Value, String>;

    /// Structured serialization. `Ok(None)` when the value has no textual
    /// form (e.g. `undefined`).
    fn stringify(&mut self, value: &Self::Value, indent: usize) -> Result<Option<String>, String>;
}

/// Render a single value into one panel line.
pub fn render_value<I>(inspector: &mut I, value: &I::Value, options: &RenderOptions) -> String
where
    I: ValueInspector + ?Sized,
{
    match inspector.inspect(value) {
        ValueKind::Null => "null".to_string(),
        ValueKind::String(text) => render_text(&text, options),
        ValueKind::Function(source) => escape_html_text(&source),
        ValueKind::PlainObject => match inspector.snapshot(value) {
            Ok(snapshot) => serialize(inspector, &snapshot, options),
            Err(message) => format!("Error: {}", message),
        },
        ValueKind::Other => serialize(inspector, value, options),
    }
}

/// Render a Rust string the way string values are rendered.
pub fn render_text(text: &str, options: &RenderOptions) -> String {
    match truncate_utf16(text, options.max_string_len) {
        Some(head) => {
            let mut rendered = escape_html_text(head);
            rendered.push_str(ELLIPSIS);
            rendered
        }
        None => escape_html_text(text),
    }
}

/// Returns the longest prefix of `text` that fits in `max` UTF-16 code units,
/// or `None` if the whole text already fits.
///
/// A surrogate pair straddling the limit is left out entirely.
pub fn truncate_utf16(text: &str, max: usize) -> Option<&str> {
    let mut units = 0;
    for (index, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max {
            return Some(&text[..index]);
        }
    }
    None
}

fn serialize<I>(inspector: &mut I, value: &I::Value, options: &RenderOptions) -> String
where
    I: ValueInspector + ?Sized,
{
    match inspector.stringify(value, options.json_indent) {
        Ok(Some(text)) => escape_html_text(&text),
        Ok(None) => String::new(),
        Err(message) => format!("Error: {}", message),
    }
}

/// Render a list of values into an entry.
pub fn render_entry<I>(
    inspector: &mut I,
    category: Category,
    items: &[I::Value],
    prefix: Option<&str>,
    options: &RenderOptions,
) -> LogEntry
where
    I: ValueInspector + ?Sized,
{
    let lines = items
        .iter()
        .map(|item| render_value(inspector, item, options))
        .collect();
    LogEntry::new(category, prefix.map(str::to_string), lines)
}

/// Render a list of values and append the entry to the panel.
pub fn render<I>(
    inspector: &mut I,
    panel: &SharedPanel,
    category: Category,
    items: &[I::Value],
    prefix: Option<&str>,
    options: &RenderOptions,
) where
    I: ValueInspector + ?Sized,
{
    let entry = render_entry(inspector, category, items, prefix, options);
    panel.lock().append(entry);
}
