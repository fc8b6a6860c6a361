//! Console panel.

use crate::entry::LogEntry;
use parking_lot::Mutex;
use std::sync::Arc;

/// Receiver of rendered entries.
pub trait PanelSink {
    /// Append an entry after all previous ones.
    fn append(&mut self, entry: LogEntry);

    /// Bring the newest entry and the command box into view.
    fn scroll_into_view(&mut self) {}
}

/// Panel shared between the console and script-side `console.*` bindings.
pub type SharedPanel = Arc<Mutex<dyn PanelSink + Send>>;

const PANEL_STYLE: &str = r#"<style>
	#js-console, #js-console * {
		box-sizing: border-box;
	}
	#js-console > div {
		border: 1px solid #ddd;
		background-color: #f0f0f0;
		font-family: monospace;
		padding: 7px 12px;
		margin-top: -1px;
	}
	#js-console .log {
		white-space: pre-wrap;
		overflow-x: auto;
	}
	#js-console .warn { background: #ffffcc; }
	#js-console .error { background: #ffdddd; }
	#js-console + form input {
		width: 100%;
		font: 10pt monospace;
		padding: 7px 12px;
		border-radius: 0;
	}
	#js-console .prefix {
		display: inline-block;
		min-width: 8em;
		margin-right: 2em;
		opacity: 0.33;
	}
</style>"#;

/// In-memory panel that keeps every entry for the session.
#[derive(Clone, Debug, Default)]
pub struct ConsolePanel {
    entries: Vec<LogEntry>,
    scroll_requests: usize,
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel already wrapped for sharing.
    pub fn shared() -> Arc<Mutex<ConsolePanel>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times the panel was asked to scroll.
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Markup of the entry list alone.
    pub fn entries_html(&self) -> String {
        let mut html = String::from("<div id=\"js-console\">");
        for entry in &self.entries {
            html.push_str(&entry.to_html());
        }
        html.push_str("</div>");
        html
    }

    /// Markup of the whole console widget: heading, entries, command box and
    /// stylesheet.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<h3 style=\"margin-bottom: 8px\">Console</h3>\n");
        html.push_str(&self.entries_html());
        html.push('\n');
        html.push_str("<form action=\"#\">\n");
        html.push_str("\t<input id=\"commandBox\" type=\"text\">\n");
        html.push_str("</form>\n");
        html.push_str(PANEL_STYLE);
        html.push('\n');
        html
    }
}

impl PanelSink for ConsolePanel {
    fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    fn scroll_into_view(&mut self) {
        self.scroll_requests += 1;
    }
}
