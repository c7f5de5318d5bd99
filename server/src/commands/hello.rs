//! Hello Command
//!
//! Greets the invoking user via a followup message, then acknowledges the
//! interaction with a deferred response.

use anyhow::Context;
use async_trait::async_trait;
use ig_model::{
    AllowedMentions, CommandDefinition, FollowupMessage, Interaction, InteractionResponse,
};

use crate::discord::RestClient;
use crate::interactions::CommandHandler;

/// Greet the user who invoked the command.
pub struct HelloCommand;

#[async_trait]
impl CommandHandler for HelloCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new("hello", "Greet the user who invoked the command")
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        rest: &RestClient,
    ) -> anyhow::Result<InteractionResponse> {
        let user_id = interaction
            .invoker_id()
            .context("interaction has no invoking user")?;

        let message = FollowupMessage {
            content: format!("<@{user_id}> Hello!"),
            allowed_mentions: Some(AllowedMentions::users()),
        };
        rest.create_followup(&interaction.token, &message).await?;

        Ok(InteractionResponse::deferred())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_is_named_hello() {
        let def = HelloCommand.definition();
        assert_eq!(def.name, "hello");
        assert!(def.options.is_empty());
    }
}
