//! Interactions Gateway Model
//!
//! Wire types for Discord's interaction protocol, shared between the server
//! and command handler authors. serde-only; no I/O here.

pub mod command;
pub mod interaction;
pub mod response;

pub use command::{CommandDefinition, CommandOption, CommandOptionType};
pub use interaction::{Interaction, InteractionType};
pub use response::{
    AllowedMentions, FollowupMessage, InteractionCallbackData, InteractionResponse,
    InteractionResponseType,
};
