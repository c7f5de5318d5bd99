//! Interaction Envelope Types
//!
//! The inbound webhook payload as Discord sends it. Parsed once per request
//! and read-only afterwards. Only the fields the gateway dispatches on are
//! modeled; unknown fields are ignored by serde.

use serde::{Deserialize, Serialize};

/// Interaction type discriminant.
///
/// Discord transmits this as a bare integer. Values the gateway does not
/// route explicitly are preserved in `Other` so the fallback path can still
/// see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    /// Health-check ping (`1`). Must be answered with a pong.
    Ping,
    /// Slash command invocation (`2`).
    ApplicationCommand,
    /// Any other interaction (components, autocomplete, modals, ...).
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Other(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

/// A single inbound interaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Interaction {
    /// Interaction ID (snowflake).
    #[serde(default)]
    pub id: Option<String>,
    /// Application this interaction targets.
    #[serde(default)]
    pub application_id: Option<String>,
    /// Interaction type.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// One-time token authenticating followup calls for this interaction.
    #[serde(default)]
    pub token: String,
    /// Command payload (present for application commands).
    #[serde(default)]
    pub data: Option<CommandData>,
    /// Guild member that invoked the interaction (guild context).
    #[serde(default)]
    pub member: Option<GuildMember>,
    /// User that invoked the interaction (DM context).
    #[serde(default)]
    pub user: Option<User>,
    /// Guild the interaction came from.
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Channel the interaction came from.
    #[serde(default)]
    pub channel_id: Option<String>,
}

impl Interaction {
    /// Name of the invoked command, if this is a command interaction.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    /// ID of the invoking user.
    ///
    /// Guild invocations carry the user inside `member`; DM invocations carry
    /// a top-level `user`.
    pub fn invoker_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

/// Command invocation payload (`data` field).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandData {
    /// Name of the invoked command.
    pub name: String,
    /// Options supplied by the invoking user.
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
}

/// A single supplied command option.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandDataOption {
    /// Option name.
    pub name: String,
    /// Option value as supplied (string, number, or bool).
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// Guild member wrapper around the invoking user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuildMember {
    /// The member's user record.
    pub user: User,
    /// Guild nickname, if set.
    #[serde(default)]
    pub nick: Option<String>,
}

/// Invoking user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    /// User ID (snowflake).
    pub id: String,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
}
