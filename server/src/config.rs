//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default base URL for Discord's REST API.
const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Discord application public key (64 hex chars, Ed25519)
    pub discord_public_key: String,

    /// Discord application ID
    pub application_id: String,

    /// Bot token used for REST API calls
    pub bot_token: String,

    /// Base URL of Discord's REST API (overridable for testing)
    pub api_base: String,

    /// Guild to register commands against, in addition to the global target (optional)
    pub guild_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            discord_public_key: env::var("DISCORD_PUBLIC_KEY")
                .context("DISCORD_PUBLIC_KEY must be set")?,
            application_id: env::var("DISCORD_APPLICATION_ID")
                .context("DISCORD_APPLICATION_ID must be set")?,
            bot_token: env::var("DISCORD_BOT_TOKEN").context("DISCORD_BOT_TOKEN must be set")?,
            api_base: env::var("DISCORD_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            guild_id: env::var("DISCORD_GUILD_ID").ok(),
        })
    }

    /// Check if a guild registration target is configured.
    #[must_use]
    pub const fn has_guild_target(&self) -> bool {
        self.guild_id.is_some()
    }

    /// Create a default configuration for testing.
    ///
    /// The public key is a valid Ed25519 point; tests that verify signatures
    /// replace it with the verifying key of a freshly generated keypair.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            discord_public_key:
                "5866666666666666666666666666666666666666666666666666666666666666".into(),
            application_id: "app123".into(),
            bot_token: "test-token".into(),
            api_base: DEFAULT_API_BASE.into(),
            guild_id: None,
        }
    }
}
