//! Transcript of echoed input and revealed output lines.

use chrono::{DateTime, Local};

/// Which side of the conversation a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echoed prompt plus the text the user submitted
    Input,
    /// Command output
    Output,
}

/// A single displayed line.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl TranscriptLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: Local::now(),
        }
    }
}

/// Ordered list of transcript lines.
///
/// Append-only, except for `clear` and for rewriting the text of the last
/// line while it is being revealed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, text: impl Into<String>) {
        self.lines.push(TranscriptLine::new(LineKind::Input, text));
    }

    pub fn push_output(&mut self, text: impl Into<String>) {
        self.lines.push(TranscriptLine::new(LineKind::Output, text));
    }

    /// Replace the text of the last line. Returns false if there is none.
    pub fn set_last_text(&mut self, text: &str) -> bool {
        match self.lines.last_mut() {
            Some(line) => {
                line.text.clear();
                line.text.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Texts of all lines, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}
