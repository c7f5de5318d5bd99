//! Interaction Response Types
//!
//! The synchronous webhook reply and the asynchronous followup body.

use serde::{Deserialize, Serialize};

/// Interaction response type discriminant (bare integer on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionResponseType {
    /// Acknowledge a ping (`1`).
    Pong,
    /// Respond immediately with a message (`4`).
    ChannelMessageWithSource,
    /// Acknowledge now, reply later via followup (`5`).
    DeferredChannelMessageWithSource,
    /// Any other response type.
    Other(u8),
}

impl From<u8> for InteractionResponseType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Pong,
            4 => Self::ChannelMessageWithSource,
            5 => Self::DeferredChannelMessageWithSource,
            other => Self::Other(other),
        }
    }
}

impl From<InteractionResponseType> for u8 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::DeferredChannelMessageWithSource => 5,
            InteractionResponseType::Other(other) => other,
        }
    }
}

/// The synchronous reply returned to Discord from the webhook endpoint.
///
/// `PONG` and deferred acks carry no data; the `data` field is omitted from
/// the JSON entirely in that case so a pong serializes to exactly
/// `{"type":1}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResponse {
    /// Response type.
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    /// Message payload, for response types that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionResponse {
    /// Acknowledge a ping.
    #[must_use]
    pub const fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// Deferred acknowledgment; the real reply follows via the REST API.
    #[must_use]
    pub const fn deferred() -> Self {
        Self {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: None,
        }
    }

    /// Immediate message reply.
    #[must_use]
    pub fn channel_message(content: impl Into<String>) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(InteractionCallbackData {
                content: Some(content.into()),
                allowed_mentions: None,
            }),
        }
    }

    /// Attach an allowed-mentions policy to the message payload.
    #[must_use]
    pub fn with_allowed_mentions(mut self, mentions: AllowedMentions) -> Self {
        if let Some(data) = self.data.as_mut() {
            data.allowed_mentions = Some(mentions);
        }
        self
    }
}

/// Message payload inside an interaction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionCallbackData {
    /// Message content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Mention policy for the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
}

/// Mention parsing policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowedMentions {
    /// Mention categories Discord may resolve (`users`, `roles`, `everyone`).
    pub parse: Vec<String>,
}

impl AllowedMentions {
    /// Allow user mentions only.
    #[must_use]
    pub fn users() -> Self {
        Self {
            parse: vec!["users".to_string()],
        }
    }

    /// Allow nothing to be resolved as a mention.
    #[must_use]
    pub const fn none() -> Self {
        Self { parse: Vec::new() }
    }
}

/// Body of a followup message sent to Discord after the initial ack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupMessage {
    /// Message content.
    pub content: String,
    /// Mention policy for the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
}
