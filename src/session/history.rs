//! Command history with most-recent-first browsing.

/// Submitted commands, unique, in insertion order, plus a browse cursor.
///
/// The cursor is `None` when not browsing. Otherwise it counts back from the
/// most recent entry: `Some(0)` is the newest, `Some(len - 1)` the oldest.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a normalized command. Blank and already-present entries are
    /// skipped. Returns whether the entry was added.
    pub fn record(&mut self, command: &str) -> bool {
        if command.is_empty() || self.entries.iter().any(|e| e == command) {
            return false;
        }
        self.entries.push(command.to_string());
        true
    }

    /// Stop browsing.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step to the next older entry.
    ///
    /// Returns the entry to load into the input, or `None` at the oldest
    /// entry (or with an empty history).
    pub fn older(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entry_at_cursor()
    }

    /// Step to the next newer entry.
    ///
    /// Returns the text to load into the input: the newer entry, or an empty
    /// string when stepping past the newest entry ends browsing. Returns
    /// `None` when not browsing.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            c => {
                self.cursor = Some(c - 1);
                self.entry_at_cursor()
            }
        }
    }

    fn entry_at_cursor(&self) -> Option<&str> {
        let cursor = self.cursor?;
        let idx = self.entries.len().checked_sub(1 + cursor)?;
        self.entries.get(idx).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
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
