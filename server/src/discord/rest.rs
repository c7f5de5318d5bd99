//! Discord REST Client
//!
//! Thin typed wrapper over the two REST surfaces the gateway needs: followup
//! messages (authenticated by the interaction token) and bulk command
//! registration (authenticated by the bot token). The base URL is
//! configurable so tests can point it at a local capture server.

use anyhow::{Context, Result};
use ig_model::{CommandDefinition, FollowupMessage};
use tracing::debug;

use crate::config::Config;

/// Client for Discord's REST API.
pub struct RestClient {
    http: reqwest::Client,
    api_base: String,
    application_id: String,
    bot_token: String,
}

impl RestClient {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            bot_token: config.bot_token.clone(),
        }
    }

    /// Send a followup message for an interaction.
    ///
    /// The interaction token is the sole credential; no bot token is needed
    /// on this endpoint.
    pub async fn create_followup(
        &self,
        interaction_token: &str,
        message: &FollowupMessage,
    ) -> Result<()> {
        let url = format!(
            "{}/webhooks/{}/{}",
            self.api_base, self.application_id, interaction_token
        );

        self.http
            .post(&url)
            .json(message)
            .send()
            .await
            .context("followup request failed")?
            .error_for_status()
            .context("Discord rejected the followup message")?;

        debug!("Followup message delivered");
        Ok(())
    }

    /// Overwrite the global command set with the given definitions.
    pub async fn overwrite_global_commands(
        &self,
        definitions: &[CommandDefinition],
    ) -> Result<()> {
        let url = format!("{}/applications/{}/commands", self.api_base, self.application_id);
        self.put_commands(&url, definitions).await
    }

    /// Overwrite a guild's command set with the given definitions.
    pub async fn overwrite_guild_commands(
        &self,
        guild_id: &str,
        definitions: &[CommandDefinition],
    ) -> Result<()> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands",
            self.api_base, self.application_id, guild_id
        );
        self.put_commands(&url, definitions).await
    }

    async fn put_commands(&self, url: &str, definitions: &[CommandDefinition]) -> Result<()> {
        self.http
            .put(url)
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(definitions)
            .send()
            .await
            .context("command registration request failed")?
            .error_for_status()
            .context("Discord rejected the command set")?;

        debug!(count = definitions.len(), url, "Command set registered");
        Ok(())
    }
}
