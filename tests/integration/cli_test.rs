//! Binary behaviour of the non-interactive subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn termfolio() -> Command {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    // Keep logs out of the user's cache dir
    let cache = TempDir::new().unwrap();
    cmd.env("XDG_CACHE_HOME", cache.into_path());
    cmd
}

/// Run the binary and render its output in the shape used by snapshots.
fn run_termfolio(args: &[&str]) -> String {
    let output = termfolio()
        .args(args)
        .output()
        .expect("Failed to execute termfolio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    format!(
        "=== termfolio {} ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        args.join(" "),
        exit_code,
        stdout,
        stderr
    )
}

/// Color codes from the theme helpers are not part of the snapshot.
const ANSI_FILTER: (&str, &str) = (r"\x1b\[[0-9;]*m", "");

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn snapshot_cli_help() {
    insta::assert_snapshot!(run_termfolio(&["--help"]), @r#"
=== termfolio --help ===
Exit code: 0

--- stdout ---
A portfolio you browse like a terminal

Usage: termfolio [OPTIONS] [COMMAND]

Commands:
  run          Open the interactive terminal (default)
  exec         Print the output of a single command and exit
  commands     List available commands
  config       Inspect or create the configuration file
  completions  Generate shell completions
  help         Print this message or the help of the given subcommand(s)

Options:
      --config <PATH>  Path to an alternate configuration file
  -h, --help           Print help
  -V, --version        Print version

--- stderr ---
"#);
}

#[test]
fn snapshot_exec_help() {
    insta::assert_snapshot!(run_termfolio(&["exec", "help"]), @r#"
=== termfolio exec help ===
Exit code: 0

--- stdout ---

Available commands:

  help      - Show this help message
  about     - Learn more about me
  projects  - View my cybersecurity projects
  skills    - See my technical skills
  contact   - Get my contact information
  clear     - Clear the terminal
  
Type any command and press Enter to execute.

--- stderr ---
"#);
}

#[test]
fn snapshot_commands() {
    insta::with_settings!({filters => vec![ANSI_FILTER]}, {
        insta::assert_snapshot!(run_termfolio(&["commands"]), @r#"
=== termfolio commands ===
Exit code: 0

--- stdout ---
  help      Show available commands
  about     Display bio information
  projects  List cybersecurity projects
  skills    Show technical skills
  contact   Display contact information
  clear     Clear the terminal screen

--- stderr ---
"#);
    });
}

#[test]
fn snapshot_exec_unknown_command() {
    insta::with_settings!({filters => vec![ANSI_FILTER]}, {
        insta::assert_snapshot!(run_termfolio(&["exec", "xyz"]), @r#"
=== termfolio exec xyz ===
Exit code: 1

--- stdout ---

--- stderr ---
Command not found: xyz
Type 'help' for available commands.
"#);
    });
}

// ============================================================================
// Behaviour
// ============================================================================

#[test]
fn exec_help_prints_command_list() {
    termfolio()
        .args(["exec", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("contact"));
}

#[test]
fn exec_is_case_insensitive() {
    termfolio()
        .args(["exec", "SKILLS"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn exec_unknown_command_fails_with_hint() {
    termfolio()
        .args(["exec", "xyz"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Command not found: xyz"))
        .stderr(predicate::str::contains("Type 'help' for available commands."));
}

#[test]
fn exec_clear_prints_nothing() {
    termfolio()
        .args(["exec", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn commands_lists_every_command() {
    let assert = termfolio().arg("commands").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in ["help", "about", "projects", "skills", "contact", "clear"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn config_path_honours_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    termfolio()
        .args(["--config", path.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_writes_default_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    termfolio()
        .args(["--config", path.to_str().unwrap(), "config", "init"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[animation]"));
    assert!(written.contains("prompt = \"navya@terminal:~$\""));
}

#[test]
fn config_show_prints_toml() {
    termfolio()
        .args(["--config", "/nonexistent/termfolio.toml", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"hacker\""));
}

#[test]
fn completions_generate_script() {
    termfolio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termfolio"));
}

#[test]
fn non_config_commands_run_without_config_dir() {
    let cache = TempDir::new().unwrap();
    for args in [&["exec", "about"][..], &["commands"][..], &["completions", "zsh"][..]] {
        Command::cargo_bin("termfolio")
            .unwrap()
            .env_remove("HOME")
            .env_remove("XDG_CONFIG_HOME")
            .env("XDG_CACHE_HOME", cache.path())
            .args(args)
            .assert()
            .success();
    }
}

#[cfg(target_os = "linux")]
#[test]
fn unusable_log_location_warns_and_continues() {
    // A regular file where the cache directory should be
    let not_a_dir = tempfile::NamedTempFile::new().unwrap();
    Command::cargo_bin("termfolio")
        .unwrap()
        .env("XDG_CACHE_HOME", not_a_dir.path())
        .args(["exec", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not())
        .stderr(predicate::str::contains("warning: logging disabled"));
}
