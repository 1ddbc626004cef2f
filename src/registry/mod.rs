//! Command registry
//!
//! Maps the fixed set of portfolio commands to a description and a
//! zero-argument handler producing display text. The set of commands is a
//! closed enum; free-form user input is only accepted at the boundary
//! (`CommandName::from_str` / `CommandRegistry::lookup`) and anything that
//! does not parse falls back to `LookupError::NotFound`.

mod content;

use std::fmt;
use std::str::FromStr;

pub use content::WELCOME;

/// Reserved handler output asking the session to clear its transcript.
///
/// Never displayed; `Command::execute` maps it to `CommandOutput::Clear`.
pub const CLEAR_SCREEN: &str = "CLEAR_SCREEN";

/// Hint appended to the not-found message.
pub const NOT_FOUND_HINT: &str = "Type 'help' for available commands.";

/// Normalize user input for lookup: trim surrounding whitespace, lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Command not found: {name}")]
    NotFound { name: String },
}

impl LookupError {
    /// Full message shown in the transcript, including the help hint.
    pub fn transcript_message(&self) -> String {
        format!("{}\n{}", self, NOT_FOUND_HINT)
    }
}

/// Every command the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Help,
    About,
    Projects,
    Skills,
    Contact,
    Clear,
}

impl CommandName {
    /// All commands in display order.
    pub const ALL: [CommandName; 6] = [
        CommandName::Help,
        CommandName::About,
        CommandName::Projects,
        CommandName::Skills,
        CommandName::Contact,
        CommandName::Clear,
    ];

    /// The lowercase key the user types.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Help => "help",
            CommandName::About => "about",
            CommandName::Projects => "projects",
            CommandName::Skills => "skills",
            CommandName::Contact => "contact",
            CommandName::Clear => "clear",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            CommandName::Help => "Show available commands",
            CommandName::About => "Display bio information",
            CommandName::Projects => "List cybersecurity projects",
            CommandName::Skills => "Show technical skills",
            CommandName::Contact => "Display contact information",
            CommandName::Clear => "Clear the terminal screen",
        }
    }

    fn handler(&self) -> fn() -> String {
        match self {
            CommandName::Help => help,
            CommandName::About => about,
            CommandName::Projects => projects,
            CommandName::Skills => skills,
            CommandName::Contact => contact,
            CommandName::Clear => clear,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

fn help() -> String {
    content::HELP.to_string()
}

fn about() -> String {
    content::ABOUT.to_string()
}

fn projects() -> String {
    content::PROJECTS.to_string()
}

fn skills() -> String {
    content::SKILLS.to_string()
}

fn contact() -> String {
    content::CONTACT.to_string()
}

fn clear() -> String {
    CLEAR_SCREEN.to_string()
}

impl FromStr for CommandName {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == key)
            .ok_or(LookupError::NotFound { name: key })
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a command asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to reveal in the transcript
    Text(String),
    /// Truncate the transcript
    Clear,
}

impl CommandOutput {
    fn from_raw(raw: String) -> Self {
        if raw == CLEAR_SCREEN {
            CommandOutput::Clear
        } else {
            CommandOutput::Text(raw)
        }
    }

    /// The displayable text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            CommandOutput::Text(text) => Some(text),
            CommandOutput::Clear => None,
        }
    }
}

/// A registered command.
#[derive(Debug, Clone)]
pub struct Command {
    kind: CommandName,
    description: &'static str,
    handler: fn() -> String,
}

impl Command {
    fn builtin(kind: CommandName) -> Self {
        Self {
            kind,
            description: kind.description(),
            handler: kind.handler(),
        }
    }

    /// Registry key of this command.
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn kind(&self) -> CommandName {
        self.kind
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Run the handler and return its raw text, sentinel included.
    pub fn execute_raw(&self) -> String {
        (self.handler)()
    }

    /// Run the handler, mapping the clear sentinel to `CommandOutput::Clear`.
    pub fn execute(&self) -> CommandOutput {
        CommandOutput::from_raw(self.execute_raw())
    }
}

/// Immutable table of all commands, built once at startup.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: [Command; 6],
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Build the registry with every built-in command.
    pub fn new() -> Self {
        Self {
            commands: CommandName::ALL.map(Command::builtin),
        }
    }

    /// Look up a command by user-typed name.
    ///
    /// Case-insensitive and whitespace-trimmed, exact match only.
    pub fn lookup(&self, name: &str) -> Result<&Command, LookupError> {
        let kind: CommandName = name.parse()?;
        Ok(self.get(kind))
    }

    /// Get the command for a known name.
    pub fn get(&self, kind: CommandName) -> &Command {
        &self.commands[kind.index()]
    }

    /// Iterate over commands in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
