//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use termfolio::tui::current_theme;
use termfolio::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the configuration file path, whether or not it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) {
    println!("{}", path.display());
}

/// Write a default config file unless one is already there.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path) -> Result<()> {
    let theme = current_theme();

    if path.exists() {
        println!(
            "{}",
            theme.primary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    println!(
        "{}",
        theme.success_text(&format!("Created {}", path.display()))
    );
    Ok(())
}
