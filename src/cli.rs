//! Command-line interface definition
//!
//! Kept in the library so the parser can be exercised from tests.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "A portfolio you browse like a terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive terminal (default)
    Run(RunArgs),

    /// Print the output of a single command and exit
    #[command(after_help = "Examples:\n  termfolio exec help\n  termfolio exec skills")]
    Exec {
        /// Command name (case-insensitive)
        #[arg(value_name = "COMMAND")]
        name: String,
    },

    /// List available commands
    Commands,

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Show output immediately instead of typing it out
    #[arg(long)]
    pub no_animation: bool,

    /// Color theme: hacker, classic or ocean
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}

impl Cli {
    /// Subcommand to run, `run` with no overrides when none was given.
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}
