//! Command registry behaviour through the public API.

use std::str::FromStr;

use termfolio::registry::{
    CommandName, CommandOutput, CommandRegistry, LookupError, CLEAR_SCREEN,
};

#[test]
fn every_listed_name_resolves() {
    let registry = CommandRegistry::new();
    for name in ["help", "about", "projects", "skills", "contact", "clear"] {
        let command = registry.lookup(name).expect(name);
        assert_eq!(command.name(), name);
    }
}

#[test]
fn lookup_ignores_case_and_surrounding_whitespace() {
    let registry = CommandRegistry::new();
    for raw in ["HELP", "  help  ", "Help", "\thElP\n"] {
        assert_eq!(registry.lookup(raw).unwrap().kind(), CommandName::Help);
    }
}

#[test]
fn unknown_names_are_not_found() {
    let registry = CommandRegistry::new();
    let err = registry.lookup("xyz").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            name: "xyz".to_string()
        }
    );
    assert_eq!(err.to_string(), "Command not found: xyz");
    assert_eq!(
        err.transcript_message(),
        "Command not found: xyz\nType 'help' for available commands."
    );
}

#[test]
fn prefixes_and_internal_spaces_do_not_match() {
    let registry = CommandRegistry::new();
    assert!(registry.lookup("hel").is_err());
    assert!(registry.lookup("help me").is_err());
    assert!(registry.lookup("").is_err());
}

#[test]
fn text_commands_return_non_empty_non_sentinel_text() {
    let registry = CommandRegistry::new();
    for command in registry.iter().filter(|c| c.kind() != CommandName::Clear) {
        let text = command.execute_raw();
        assert!(!text.is_empty(), "{} returned nothing", command.name());
        assert_ne!(text, CLEAR_SCREEN);
        assert!(matches!(command.execute(), CommandOutput::Text(_)));
    }
}

#[test]
fn clear_yields_the_sentinel() {
    let registry = CommandRegistry::new();
    let clear = registry.get(CommandName::Clear);
    assert_eq!(clear.execute_raw(), CLEAR_SCREEN);
    assert_eq!(clear.execute(), CommandOutput::Clear);
}

#[test]
fn execution_is_idempotent() {
    let registry = CommandRegistry::new();
    for command in registry.iter() {
        assert_eq!(command.execute(), command.execute());
    }
}

#[test]
fn help_mentions_every_command() {
    let registry = CommandRegistry::new();
    let help = registry.get(CommandName::Help).execute_raw();
    for command in registry.iter() {
        assert!(help.contains(command.name()), "help omits {}", command.name());
    }
}

#[test]
fn command_name_parses_like_lookup() {
    assert_eq!(CommandName::from_str(" SKILLS "), Ok(CommandName::Skills));
    assert!(CommandName::from_str("sudo").is_err());
    assert_eq!(CommandName::Contact.to_string(), "contact");
}
