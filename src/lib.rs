//! termfolio - a portfolio presented as a simulated terminal
//!
//! The library holds everything but process setup: the command registry,
//! the interactive session state machine, configuration, logging and the
//! ratatui front end.

pub mod cli;
pub mod config;
pub mod logging;
pub mod registry;
pub mod session;
pub mod tui;

pub use config::Config;
pub use registry::{CommandName, CommandOutput, CommandRegistry, LookupError};
pub use session::TerminalSession;
pub use tui::theme;
