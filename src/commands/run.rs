//! Interactive terminal handler

use std::path::Path;

use anyhow::{anyhow, Result};

use termfolio::cli::RunArgs;
use termfolio::theme::Theme;
use termfolio::tui::{TerminalApp, TuiApp};
use termfolio::Config;

/// Load config, apply command-line overrides and run the TUI until quit.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    if args.no_animation {
        config.animation.enabled = false;
    }
    if let Some(theme) = &args.theme {
        config.ui.theme = theme.clone();
    }

    let theme = Theme::by_name(&config.ui.theme).ok_or_else(|| {
        anyhow!(
            "Unknown theme '{}' (expected one of: {})",
            config.ui.theme,
            Theme::NAMES.join(", ")
        )
    })?;

    tracing::info!(theme = %config.ui.theme, animation = config.animation.enabled, "Starting terminal");
    let mut app = TerminalApp::new(&config, theme)?;
    app.run()?;
    tracing::info!("Terminal closed");
    Ok(())
}
