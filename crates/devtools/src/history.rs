//! Command history with recall.

/// Past commands in chronological order, plus a recall cursor.
///
/// The cursor is either unset or an index in `0..=len`. A cursor equal to
/// `len` is the append-position: the user is not browsing history.
#[derive(Clone, Debug, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command without moving the cursor.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
    }

    /// Append a command and move the cursor to the append-position.
    pub fn push_and_reset(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = Some(self.entries.len());
    }

    /// Step back one command.
    ///
    /// The cursor stops at the oldest entry; further calls keep returning it.
    /// An empty history yields an empty string.
    pub fn get_prev(&mut self) -> &str {
        let cursor = self.cursor.unwrap_or(self.entries.len());
        let cursor = cursor.saturating_sub(1);
        self.cursor = Some(cursor);
        self.entries.get(cursor).map(String::as_str).unwrap_or("")
    }

    /// Step forward one command; past the newest entry the cursor parks at the
    /// append-position and an empty string is returned.
    pub fn get_next(&mut self) -> &str {
        let len = self.entries.len();
        let cursor = self.cursor.unwrap_or(len) + 1;
        if cursor >= len {
            self.cursor = Some(len);
            return "";
        }
        self.cursor = Some(cursor);
        &self.entries[cursor]
    }

    /// Current cursor, `None` until the first recall or reset.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether the cursor points at an entry rather than the append-position.
    pub fn is_recalling(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor < self.entries.len())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
