//! Terminal panel.

use common::unescape_html_text;
use devtools::{Category, ConsolePanel, LogEntry, PanelSink};
use std::io::Write;
use tracing::warn;

fn marker(category: Category) -> &'static str {
    match category {
        Category::Log => "",
        Category::Warn => "[WARN] ",
        Category::Error => "[ERROR] ",
    }
}

/// Text shown in the terminal for an entry.
///
/// The prefix, when present, takes the first line and the values are indented
/// beneath it.
pub fn format_entry(entry: &LogEntry) -> String {
    let body = unescape_html_text(&entry.body());
    match entry.prefix.as_deref().filter(|p| !p.is_empty()) {
        Some(prefix) => {
            let mut text = format!("{}{}", marker(entry.category), prefix);
            for line in body.lines() {
                text.push_str("\n  ");
                text.push_str(line);
            }
            text
        }
        None => format!("{}{}", marker(entry.category), body),
    }
}

/// Panel that keeps entries like [`ConsolePanel`] and echoes each one to a
/// writer.
pub struct TerminalPanel<W> {
    panel: ConsolePanel,
    out: W,
    echo: bool,
}

impl<W: Write> TerminalPanel<W> {
    pub fn new(out: W, echo: bool) -> Self {
        Self {
            panel: ConsolePanel::new(),
            out,
            echo,
        }
    }

    /// Entries appended so far.
    pub fn panel(&self) -> &ConsolePanel {
        &self.panel
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> PanelSink for TerminalPanel<W> {
    fn append(&mut self, entry: LogEntry) {
        if self.echo {
            if let Err(e) = writeln!(self.out, "{}", format_entry(&entry)) {
                warn!("Failed to echo console entry: {}", e);
            }
        }
        self.panel.append(entry);
    }

    fn scroll_into_view(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("Failed to flush console output: {}", e);
        }
        self.panel.scroll_into_view();
    }
}
