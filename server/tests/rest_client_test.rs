//! Discord REST Client Integration Tests
//!
//! Points the client at a local capture server and asserts the exact calls
//! it makes.

mod helpers;

use ig_model::{AllowedMentions, FollowupMessage};
use ig_server::commands;
use ig_server::config::Config;
use ig_server::discord::RestClient;

use helpers::spawn_capture_server;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn followup_posts_to_interaction_webhook_url() {
    let (api_base, captured) = spawn_capture_server().await;
    let mut config = Config::default_for_test();
    config.api_base = api_base;

    let rest = RestClient::new(&config);
    let message = FollowupMessage {
        content: "<@42> Hello!".to_string(),
        allowed_mentions: Some(AllowedMentions::users()),
    };
    rest.create_followup("tok123", &message).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "POST");
    assert_eq!(captured[0].path, "/webhooks/app123/tok123");
    assert_eq!(captured[0].body["content"], "<@42> Hello!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn registration_hits_global_and_guild_targets_once_each() {
    let (api_base, captured) = spawn_capture_server().await;
    let mut config = Config::default_for_test();
    config.api_base = api_base;
    config.guild_id = Some("guild9".to_string());

    let registry = commands::build_registry().unwrap();
    let definitions = registry.definitions();
    let rest = RestClient::new(&config);

    // Same flow as the register-commands binary: global, then each guild
    rest.overwrite_global_commands(&definitions).await.unwrap();
    if let Some(guild_id) = &config.guild_id {
        rest.overwrite_guild_commands(guild_id, &definitions)
            .await
            .unwrap();
    }

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].method, "PUT");
    assert_eq!(captured[0].path, "/applications/app123/commands");
    assert_eq!(captured[1].method, "PUT");
    assert_eq!(captured[1].path, "/applications/app123/guilds/guild9/commands");

    // Each call carries the full definition set
    assert_eq!(captured[0].body[0]["name"], "hello");
    assert_eq!(captured[0].body, captured[1].body);
}
