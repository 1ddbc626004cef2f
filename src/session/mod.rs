//! Terminal session
//!
//! Owns the transcript, the pending input line and command history, and
//! drives the reveal animation for command output.
//!
//! # Architecture
//!
//! - `state`: session state enum and the key/result types
//! - `transcript`: displayed input/output lines
//! - `history`: submitted commands and the browse cursor
//! - `input`: line editor for the pending command
//! - `reveal`: the cooperative typewriter task and its pacing
//!
//! The session never sleeps or spawns timers. The caller feeds it keys and
//! the current time through `tick`, and asks `next_deadline` how long it may
//! wait before the next reveal step is due.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//! use termfolio::registry::CommandRegistry;
//! use termfolio::session::{SessionKey, SessionOptions, TerminalSession};
//!
//! let registry = Arc::new(CommandRegistry::new());
//! let mut session = TerminalSession::with_os_rng(registry, SessionOptions::default());
//! let now = session.start(Instant::now());
//! let now = session.settle(now);
//!
//! for c in "help".chars() {
//!     session.handle_key(SessionKey::Char(c), now);
//! }
//! session.handle_key(SessionKey::Enter, now);
//! session.settle(now);
//! assert!(!session.is_animating());
//! ```

pub mod history;
pub mod input;
pub mod reveal;
pub mod state;
pub mod transcript;

use std::sync::Arc;
use std::time::Instant;

use rand_core::{OsRng, RngCore};
use tracing::{debug, info};

use crate::registry::{normalize, CommandOutput, CommandRegistry, WELCOME};

pub use history::CommandHistory;
pub use input::InputBuffer;
pub use reveal::{Pacing, Reveal, RevealStep};
pub use state::{KeyOutcome, SessionKey, SessionState, Submission, TickResult};
pub use transcript::{LineKind, Transcript, TranscriptLine};

/// Prompt shown before the input line and echoed with every submission.
pub const DEFAULT_PROMPT: &str = "navya@terminal:~$";

/// Construction options for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Prompt label, without the trailing space
    pub prompt: String,
    /// Text revealed by `start` and `reset`
    pub welcome: String,
    pub pacing: Pacing,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: WELCOME.to_string(),
            pacing: Pacing::default(),
        }
    }
}

/// One interactive terminal session.
pub struct TerminalSession<R: RngCore = OsRng> {
    registry: Arc<CommandRegistry>,
    options: SessionOptions,
    transcript: Transcript,
    input: InputBuffer,
    history: CommandHistory,
    reveal: Option<Reveal>,
    rng: R,
}

impl TerminalSession<OsRng> {
    /// Create a session drawing reveal delays from the OS RNG.
    pub fn with_os_rng(registry: Arc<CommandRegistry>, options: SessionOptions) -> Self {
        Self::new(registry, options, OsRng)
    }
}

impl<R: RngCore> TerminalSession<R> {
    /// Create an idle session with an empty transcript.
    ///
    /// Call `start` to reveal the welcome banner.
    pub fn new(registry: Arc<CommandRegistry>, options: SessionOptions, rng: R) -> Self {
        Self {
            registry,
            options,
            transcript: Transcript::new(),
            input: InputBuffer::new(),
            history: CommandHistory::new(),
            reveal: None,
            rng,
        }
    }

    /// Begin revealing the welcome banner. Returns `now` for chaining.
    pub fn start(&mut self, now: Instant) -> Instant {
        info!("Session started");
        let welcome = self.options.welcome.clone();
        self.begin_reveal(&welcome, now);
        now
    }

    /// Cancel any reveal, empty the transcript and replay the welcome banner.
    ///
    /// Command history is kept.
    pub fn reset(&mut self, now: Instant) {
        self.cancel_reveal();
        self.transcript.clear();
        self.input.take();
        self.history.reset_cursor();
        info!("Session reset");
        let welcome = self.options.welcome.clone();
        self.begin_reveal(&welcome, now);
    }

    pub fn state(&self) -> SessionState {
        if self.reveal.is_some() {
            SessionState::Animating
        } else {
            SessionState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.reveal.is_some()
    }

    /// Feed one key press.
    ///
    /// Every key is ignored while a reveal is in progress.
    pub fn handle_key(&mut self, key: SessionKey, now: Instant) -> KeyOutcome {
        if self.is_animating() {
            return KeyOutcome::Ignored;
        }

        let changed = match key {
            SessionKey::Enter => {
                return self
                    .submit(now)
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Submitted);
            }
            SessionKey::Up => self.history_up(),
            SessionKey::Down => self.history_down(),
            SessionKey::Char(c) => {
                self.input.insert(c);
                true
            }
            SessionKey::Backspace => self.input.backspace(),
            SessionKey::Delete => self.input.delete(),
            SessionKey::Left => self.input.move_left(),
            SessionKey::Right => self.input.move_right(),
            SessionKey::Home => self.input.move_home(),
            SessionKey::End => self.input.move_end(),
        };

        if changed {
            KeyOutcome::Changed
        } else {
            KeyOutcome::Unchanged
        }
    }

    /// Replace the pending input, e.g. from a paste. No-op while animating.
    pub fn set_input(&mut self, text: &str) -> bool {
        if self.is_animating() {
            return false;
        }
        self.input.set(text);
        true
    }

    /// Submit the pending input.
    ///
    /// Returns `None` if a reveal is in progress.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        if self.is_animating() {
            return None;
        }

        let raw = self.input.take();
        self.transcript
            .push_input(format!("{} {}", self.options.prompt, raw));

        let command = normalize(&raw);
        self.history.record(&command);
        self.history.reset_cursor();

        if command.is_empty() {
            return Some(Submission::Empty);
        }

        let output = self.registry.lookup(&command).map(|c| c.execute());
        let submission = match output {
            Ok(CommandOutput::Clear) => {
                debug!(command = %command, "Clearing transcript");
                self.transcript.clear();
                Submission::Cleared
            }
            Ok(CommandOutput::Text(text)) => {
                debug!(command = %command, "Running command");
                self.begin_reveal(&text, now);
                Submission::Revealing
            }
            Err(err) => {
                debug!(command = %command, "Unknown command");
                self.begin_reveal(&err.transcript_message(), now);
                Submission::NotFound
            }
        };
        Some(submission)
    }

    /// Load the next older history entry into the input.
    pub fn history_up(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        match self.history.older() {
            Some(entry) => {
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    /// Load the next newer history entry, or clear the input past the newest.
    pub fn history_down(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        match self.history.newer() {
            Some(entry) => {
                self.input.set(entry);
                true
            }
            None => false,
        }
    }

    /// Run every reveal step due at `now`.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let Some(reveal) = self.reveal.as_mut() else {
            return TickResult::Idle;
        };

        let mut progressed = false;
        while reveal.is_due(now) {
            match reveal.step(&mut self.transcript, &self.options.pacing, &mut self.rng) {
                RevealStep::Continue(_) => progressed = true,
                RevealStep::Finished => {
                    self.reveal = None;
                    debug!("Reveal finished");
                    return TickResult::Finished;
                }
            }
        }

        if progressed {
            TickResult::Progressed
        } else {
            TickResult::Idle
        }
    }

    /// When the next reveal step is due, if one is in progress.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reveal.as_ref().map(Reveal::due)
    }

    /// Tick through every remaining reveal step without waiting.
    ///
    /// Returns the instant the reveal finished at (or `now` if idle).
    pub fn settle(&mut self, now: Instant) -> Instant {
        let mut clock = now;
        while let Some(deadline) = self.next_deadline() {
            clock = clock.max(deadline);
            self.tick(clock);
        }
        clock
    }

    /// Drop the in-flight reveal, if any. No further steps will run.
    ///
    /// The partially revealed line stays in the transcript as is.
    pub fn cancel_reveal(&mut self) -> bool {
        match self.reveal.take() {
            Some(_) => {
                debug!("Reveal cancelled");
                true
            }
            None => false,
        }
    }

    fn begin_reveal(&mut self, text: &str, now: Instant) {
        self.cancel_reveal();
        let reveal = Reveal::new(text, now);
        debug!(lines = reveal.line_count(), "Reveal started");
        self.reveal = Some(reveal);
        // The first step runs immediately.
        self.tick(now);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn pending_input(&self) -> &str {
        self.input.as_str()
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// `None` when not browsing history.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
