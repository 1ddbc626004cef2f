//! Base TUI application
//!
//! `App` owns the ratatui terminal and the raw-mode/alternate-screen
//! lifecycle. `TuiApp` is implemented by concrete applications and supplies
//! the key handling, drawing and timer hooks driven by the shared event loop.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Terminal handle plus run state.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    running: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    ///
    /// `tick_rate` caps how long the event loop blocks waiting for input.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e.into());
            }
        };

        Ok(Self {
            terminal,
            tick_rate,
            running: true,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the event loop to exit after the current iteration.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next input event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

/// Leave the alternate screen and raw mode, ignoring errors.
fn restore_terminal() {
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Behaviour shared by full-screen applications.
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    /// Handle a key press.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    /// Handle pasted text. Ignored by default.
    fn handle_paste(&mut self, _text: String) -> Result<()> {
        Ok(())
    }

    /// Advance timers. Called once per loop iteration.
    ///
    /// Returns whether the screen needs to be redrawn.
    fn on_tick(&mut self, _now: Instant) -> Result<bool> {
        Ok(false)
    }

    /// Next instant the app wants to be woken up at, if any.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    fn draw(&mut self) -> Result<()>;

    /// Run the event loop until `App::quit` is called.
    ///
    /// Only redraws after input, a resize or a tick that changed something.
    fn run(&mut self) -> Result<()> {
        let mut dirty = true;
        while self.app().is_running() {
            if dirty {
                self.draw()?;
            }

            let tick_rate = self.app().tick_rate();
            let timeout = poll_timeout(self.next_deadline(), Instant::now(), tick_rate);
            let event = self.app().next_event(timeout)?;
            let event_redraw = needs_redraw(event.as_ref());
            match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key)?
                }
                Some(Event::Paste(text)) => self.handle_paste(text)?,
                _ => {}
            }

            let tick_redraw = self.on_tick(Instant::now())?;
            dirty = event_redraw || tick_redraw;
        }
        Ok(())
    }
}

/// Whether `event` can change what is on screen.
pub fn needs_redraw(event: Option<&Event>) -> bool {
    match event {
        Some(Event::Key(key)) => key.kind == KeyEventKind::Press,
        Some(Event::Paste(_)) | Some(Event::Resize(_, _)) => true,
        _ => false,
    }
}

/// How long to block for input: until `deadline`, capped at `tick_rate`.
pub fn poll_timeout(deadline: Option<Instant>, now: Instant, tick_rate: Duration) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(tick_rate),
        None => tick_rate,
    }
}
