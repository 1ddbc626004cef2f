//! Session state and shared types
//!
//! Contains the state enum of the terminal session as well as the key and
//! result types exchanged with the front end.

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Awaiting input; the input line is visible and editable
    #[default]
    Idle,
    /// A reveal is in progress; input is hidden and keys are ignored
    Animating,
}

/// Keys the session understands.
///
/// Enter, Up and Down drive the state machine. The rest edit the pending
/// input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Enter,
    Up,
    Down,
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Result of feeding a key to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The session was animating; the key was dropped
    Ignored,
    /// The key had no effect (e.g. history navigation at a bound)
    Unchanged,
    /// The pending input or history cursor changed
    Changed,
    /// Enter submitted the pending input
    Submitted(Submission),
}

/// What a submit did with the pending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; only the prompt line was echoed
    Empty,
    /// `clear` emptied the transcript
    Cleared,
    /// Command output is being revealed
    Revealing,
    /// Unknown command; the not-found message is being revealed
    NotFound,
}

/// Result of advancing the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing was due
    Idle,
    /// One or more reveal steps ran; more remain
    Progressed,
    /// The reveal completed and the session is back to Idle
    Finished,
}

impl TickResult {
    /// Whether the transcript may have changed.
    pub fn is_dirty(self) -> bool {
        !matches!(self, TickResult::Idle)
    }
}
