//! Shared fixtures for integration tests.

use std::sync::Arc;
use std::time::Instant;

use rand_core::RngCore;
use termfolio::registry::CommandRegistry;
use termfolio::session::{Pacing, SessionKey, SessionOptions, TerminalSession};

/// RNG that always yields zero, so every per-character delay is the minimum.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        dest.fill(0);
        Ok(())
    }
}

/// Session with default pacing, deterministic delays and the given banner.
pub fn paced_session(welcome: &str) -> TerminalSession<ZeroRng> {
    let options = SessionOptions {
        welcome: welcome.to_string(),
        ..SessionOptions::default()
    };
    TerminalSession::new(Arc::new(CommandRegistry::new()), options, ZeroRng)
}

/// Idle session with an empty transcript (banner not started), instant pacing.
pub fn idle_session() -> TerminalSession<ZeroRng> {
    let options = SessionOptions {
        pacing: Pacing::instant(),
        ..SessionOptions::default()
    };
    TerminalSession::new(Arc::new(CommandRegistry::new()), options, ZeroRng)
}

/// Type `text` and press Enter, then let the reveal finish.
pub fn run_command(session: &mut TerminalSession<ZeroRng>, text: &str) {
    let now = Instant::now();
    for c in text.chars() {
        session.handle_key(SessionKey::Char(c), now);
    }
    session.handle_key(SessionKey::Enter, now);
    session.settle(now);
}

/// All transcript texts, oldest first.
pub fn transcript_texts(session: &TerminalSession<ZeroRng>) -> Vec<String> {
    session
        .transcript()
        .texts()
        .map(str::to_string)
        .collect()
}
