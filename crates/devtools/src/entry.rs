//! Console log entries.

use common::escape_html_text;
use std::fmt;

/// Entry category. Controls styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Log,
    Warn,
    Error,
}

impl Category {
    /// CSS class used for the entry's element in the panel.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Log => "log",
            Category::Warn => "warn",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// One rendered console output event.
///
/// `lines` hold already-rendered text: escaped for HTML, except for
/// serialization failure placeholders which are kept as produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub category: Category,
    pub prefix: Option<String>,
    pub lines: Vec<String>,
}

impl LogEntry {
    pub fn new(category: Category, prefix: Option<String>, lines: Vec<String>) -> Self {
        Self {
            category,
            prefix,
            lines,
        }
    }

    /// Value lines joined the way the panel shows them.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }

    /// Markup for this entry inside the console panel.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div class=\"{}\">", self.category.css_class());
        // An empty prefix is treated as no prefix.
        if let Some(prefix) = self.prefix.as_deref().filter(|p| !p.is_empty()) {
            html.push_str("<span class=\"prefix\">");
            html.push_str(&escape_html_text(prefix));
            html.push_str("</span>\n");
        }
        html.push_str(&self.body());
        html.push_str("</div>");
        html
    }
}
