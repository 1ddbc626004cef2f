//! Portfolio terminal TUI application
//!
//! Binds crossterm key events to the terminal session and drives its reveal
//! animation from the event loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, TuiApp};
use super::ui::render_terminal;
use crate::config::Config;
use crate::registry::CommandRegistry;
use crate::session::{SessionKey, SessionOptions, TerminalSession, TickResult};
use crate::theme::Theme;

/// What a key press means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the program
    Quit,
    /// Cancel any reveal and replay the welcome banner
    Reset,
    /// Forward to the session
    Session(SessionKey),
    /// Not bound
    None,
}

/// Map a crossterm key event to an application action.
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyAction::Quit,
        KeyCode::Char('l') if ctrl => KeyAction::Reset,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Session(SessionKey::Char(c)),
        KeyCode::Enter => KeyAction::Session(SessionKey::Enter),
        KeyCode::Up => KeyAction::Session(SessionKey::Up),
        KeyCode::Down => KeyAction::Session(SessionKey::Down),
        KeyCode::Left => KeyAction::Session(SessionKey::Left),
        KeyCode::Right => KeyAction::Session(SessionKey::Right),
        KeyCode::Home => KeyAction::Session(SessionKey::Home),
        KeyCode::End => KeyAction::Session(SessionKey::End),
        KeyCode::Backspace => KeyAction::Session(SessionKey::Backspace),
        KeyCode::Delete => KeyAction::Session(SessionKey::Delete),
        _ => KeyAction::None,
    }
}

/// Full-screen portfolio terminal.
pub struct TerminalApp {
    app: App,
    session: TerminalSession,
    title: String,
    theme: Theme,
}

impl TerminalApp {
    /// Set up the terminal and start a session from `config`.
    pub fn new(config: &Config, theme: Theme) -> Result<Self> {
        let app = App::new(Duration::from_millis(250))?;
        let registry = Arc::new(CommandRegistry::new());
        let options: SessionOptions = config.session_options();
        let mut session = TerminalSession::with_os_rng(registry, options);
        session.start(Instant::now());

        Ok(Self {
            app,
            session,
            title: config.terminal.title.clone(),
            theme,
        })
    }
}

impl TuiApp for TerminalApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();
        match map_key(key) {
            KeyAction::Quit => self.app.quit(),
            KeyAction::Reset => self.session.reset(now),
            KeyAction::Session(session_key) => {
                let outcome = self.session.handle_key(session_key, now);
                tracing::trace!(?session_key, ?outcome, "Key handled");
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn handle_paste(&mut self, text: String) -> Result<()> {
        // Single-line input: keep only the first line of the paste.
        let first_line = text.lines().next().unwrap_or_default();
        let combined = format!("{}{}", self.session.pending_input(), first_line);
        self.session.set_input(&combined);
        Ok(())
    }

    fn on_tick(&mut self, now: Instant) -> Result<bool> {
        let result = self.session.tick(now);
        if result == TickResult::Finished {
            tracing::debug!("Output revealed, input re-enabled");
        }
        Ok(result.is_dirty())
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let title = &self.title;
        let theme = &self.theme;
        self.app
            .draw(|frame| render_terminal(frame, session, title, theme))
    }
}
