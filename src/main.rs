use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use termfolio::cli::{Cli, Commands, ConfigCommands};
use termfolio::logging;

mod commands;

fn main() -> Result<ExitCode> {
    // Logging is optional; the terminal works without it.
    if let Some(path) = logging::log_path() {
        if let Err(e) = logging::init_global(&path) {
            eprintln!("warning: logging disabled: {:#}", e);
        }
    }

    let cli = Cli::parse();
    let explicit_config = cli.config.clone();

    match cli.command_or_default() {
        Commands::Run(args) => {
            let config_path = resolve_config_path(explicit_config.as_deref())?;
            commands::run::handle(&config_path, &args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exec { name } => commands::exec::handle_exec(&name),
        Commands::Commands => {
            commands::exec::handle_list()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config(cmd) => {
            let config_path = resolve_config_path(explicit_config.as_deref())?;
            match cmd {
                ConfigCommands::Show => commands::config::handle_show(&config_path)?,
                ConfigCommands::Path => commands::config::handle_path(&config_path),
                ConfigCommands::Init => commands::config::handle_init(&config_path)?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `--config` when given, otherwise the default location.
fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => termfolio::Config::config_path(),
    }
}
