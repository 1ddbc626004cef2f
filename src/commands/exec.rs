//! One-shot command output without the interactive terminal

use std::process::ExitCode;

use anyhow::Result;

use termfolio::registry::{CommandOutput, CommandRegistry};
use termfolio::tui::current_theme;

/// Print one command's output.
///
/// Unknown names print the not-found message to stderr and exit with 1.
/// `clear` has nothing to show outside the terminal and prints nothing.
#[cfg(not(tarpaulin_include))]
pub fn handle_exec(name: &str) -> Result<ExitCode> {
    let registry = CommandRegistry::new();
    match registry.lookup(name) {
        Ok(command) => {
            tracing::info!(command = command.name(), "Executing command");
            if let CommandOutput::Text(text) = command.execute() {
                println!("{}", text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let theme = current_theme();
            eprintln!("{}", theme.error_text(&err.transcript_message()));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// List command names with their descriptions.
#[cfg(not(tarpaulin_include))]
pub fn handle_list() -> Result<()> {
    let registry = CommandRegistry::new();
    let theme = current_theme();
    let width = registry.iter().map(|c| c.name().len()).max().unwrap_or(0);

    for command in registry.iter() {
        println!(
            "  {}  {}",
            theme.accent_text(&format!("{:<width$}", command.name(), width = width)),
            theme.secondary_text(command.description())
        );
    }
    Ok(())
}
