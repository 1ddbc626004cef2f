//! Typewriter reveal of output text.
//!
//! A `Reveal` is a cooperative task: each call to `step` performs one unit
//! of work against the transcript and returns how long to wait before the
//! next one. The owning session drives it from a single tick source and can
//! drop it at any time to cancel.
//!
//! Per line, the first step appends an empty output line. Each following
//! step extends it by one character and waits a random per-character delay.
//! Once the line is complete, its full text is written and the task waits
//! the fixed line delay. A step that finds no lines left finishes the task.

use std::time::{Duration, Instant};

use rand_core::RngCore;

use super::transcript::Transcript;

/// Timing of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Lower bound (inclusive) of the per-character delay
    pub char_delay_min: Duration,
    /// Upper bound (exclusive) of the per-character delay
    pub char_delay_max: Duration,
    /// Pause after each completed line
    pub line_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            char_delay_min: Duration::from_millis(10),
            char_delay_max: Duration::from_millis(30),
            line_delay: Duration::from_millis(100),
        }
    }
}

impl Pacing {
    /// Zero delays: a whole reveal completes in one tick.
    pub fn instant() -> Self {
        Self {
            char_delay_min: Duration::ZERO,
            char_delay_max: Duration::ZERO,
            line_delay: Duration::ZERO,
        }
    }

    /// Sample a per-character delay uniformly from `[min, max)`.
    ///
    /// Resolution is one microsecond. Returns `min` when the range is empty.
    pub fn char_delay(&self, rng: &mut impl RngCore) -> Duration {
        let min = self.char_delay_min.as_micros() as u64;
        let max = self.char_delay_max.as_micros() as u64;
        if max <= min {
            return self.char_delay_min;
        }
        Duration::from_micros(min + rng.next_u64() % (max - min))
    }
}

/// Outcome of one reveal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Wait this long, then step again
    Continue(Duration),
    /// Every line has been written
    Finished,
}

/// An in-flight reveal of one block of text.
#[derive(Debug, Clone)]
pub struct Reveal {
    lines: Vec<String>,
    line_idx: usize,
    char_idx: usize,
    due: Instant,
}

impl Reveal {
    /// Prepare a reveal of `text`, with the first step due at `start`.
    pub fn new(text: &str, start: Instant) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            line_idx: 0,
            char_idx: 0,
            due: start,
        }
    }

    /// When the next step should run.
    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.due <= now
    }

    /// Number of lines this reveal writes.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Run one step and schedule the next.
    pub fn step(
        &mut self,
        transcript: &mut Transcript,
        pacing: &Pacing,
        rng: &mut impl RngCore,
    ) -> RevealStep {
        let Some(line) = self.lines.get(self.line_idx) else {
            return RevealStep::Finished;
        };

        if self.char_idx == 0 {
            transcript.push_output("");
        }

        let delay = match prefix_end(line, self.char_idx) {
            Some(end) => {
                transcript.set_last_text(&line[..end]);
                self.char_idx += 1;
                pacing.char_delay(rng)
            }
            None => {
                transcript.set_last_text(line);
                self.line_idx += 1;
                self.char_idx = 0;
                pacing.line_delay
            }
        };

        self.due += delay;
        RevealStep::Continue(delay)
    }
}

/// Byte end of the first `char_idx + 1` chars of `line`, or `None` if the
/// line has no char at `char_idx`.
fn prefix_end(line: &str, char_idx: usize) -> Option<usize> {
    let mut chars = line.char_indices().skip(char_idx);
    let (start, c) = chars.next()?;
    Some(start + c.len_utf8())
}
