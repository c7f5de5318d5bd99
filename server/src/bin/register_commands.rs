//! Command Registration - Entry Point
//!
//! Pushes the built-in command set to Discord: one bulk overwrite of the
//! global target, plus one per configured guild target.

use anyhow::Result;
use tracing::info;

use ig_server::commands;
use ig_server::config::Config;
use ig_server::discord::RestClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ig_server=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let registry = commands::build_registry()?;
    let definitions = registry.definitions();
    let rest = RestClient::new(&config);

    rest.overwrite_global_commands(&definitions).await?;
    info!(count = definitions.len(), "Registered global commands");

    if let Some(guild_id) = &config.guild_id {
        rest.overwrite_guild_commands(guild_id, &definitions).await?;
        info!(guild_id = %guild_id, "Registered guild commands");
    }

    Ok(())
}
