//! TUI (Text User Interface) module
//!
//! Full-screen rendering of the portfolio terminal using ratatui/crossterm.

pub mod app;
pub mod terminal_app;
pub mod theme;
pub mod ui;

pub use app::{App, TuiApp};
pub use terminal_app::TerminalApp;
pub use theme::current_theme;
