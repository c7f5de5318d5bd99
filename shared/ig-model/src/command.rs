//! Command Definition Types
//!
//! Payloads pushed to Discord when registering the command set.

use serde::{Deserialize, Serialize};

/// Command option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CommandOptionType {
    /// Nested sub-command (`1`).
    SubCommand,
    /// String input (`3`).
    String,
    /// Integer input (`4`).
    Integer,
    /// Boolean input (`5`).
    Boolean,
    /// User mention (`6`).
    User,
    /// Channel mention (`7`).
    Channel,
    /// Role mention (`8`).
    Role,
    /// Any other option type.
    Other(u8),
}

impl From<u8> for CommandOptionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::SubCommand,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            other => Self::Other(other),
        }
    }
}

impl From<CommandOptionType> for u8 {
    fn from(value: CommandOptionType) -> Self {
        match value {
            CommandOptionType::SubCommand => 1,
            CommandOptionType::String => 3,
            CommandOptionType::Integer => 4,
            CommandOptionType::Boolean => 5,
            CommandOptionType::User => 6,
            CommandOptionType::Channel => 7,
            CommandOptionType::Role => 8,
            CommandOptionType::Other(other) => other,
        }
    }
}

/// Command option definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Option description.
    pub description: String,
    /// Option type.
    #[serde(rename = "type")]
    pub option_type: CommandOptionType,
    /// Whether this option is required.
    #[serde(default)]
    pub required: bool,
}

/// A registrable command definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name (1-32 characters, lowercase, no spaces).
    pub name: String,
    /// Command description (1-100 characters).
    pub description: String,
    /// Command options/parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandDefinition {
    /// Definition with no options.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }
}
