//! Config file loading, saving and validation.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use termfolio::config::{Config, ConfigError};
use termfolio::session::Pacing;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[terminal]\nprompt = \"guest@box:~$\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.terminal.prompt, "guest@box:~$");
    assert_eq!(config.terminal.title, "navya@terminal: ~");
    assert_eq!(config.animation, Config::default().animation);
    assert_eq!(config.ui.theme, "hacker");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.ui.theme = "ocean".to_string();
    config.animation.line_delay_ms = 50;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn invalid_delay_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[animation]\nchar_delay_min_ms = 40\nchar_delay_max_ms = 20\n",
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::InvalidCharDelay { min: 40, max: 20 })
    );
}

#[test]
fn unknown_theme_is_rejected() {
    let mut config = Config::default();
    config.ui.theme = "neon".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::UnknownTheme("neon".to_string()))
    );
}

#[test]
fn malformed_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[terminal\nprompt = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn disabled_animation_gives_instant_pacing() {
    let mut config = Config::default();
    config.animation.enabled = false;
    assert_eq!(config.session_options().pacing, Pacing::instant());
}

#[test]
fn custom_timing_flows_into_session_options() {
    let mut config = Config::default();
    config.terminal.prompt = "root#".to_string();
    config.animation.char_delay_min_ms = 1;
    config.animation.char_delay_max_ms = 2;
    config.animation.line_delay_ms = 5;

    let options = config.session_options();
    assert_eq!(options.prompt, "root#");
    assert_eq!(options.pacing.char_delay_min, Duration::from_millis(1));
    assert_eq!(options.pacing.char_delay_max, Duration::from_millis(2));
    assert_eq!(options.pacing.line_delay, Duration::from_millis(5));
}
