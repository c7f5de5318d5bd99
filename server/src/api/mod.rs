//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::discord::RestClient;
use crate::interactions::{self, CommandRegistry, InteractionEvents, SignatureVerifier};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Command registry, built once at startup and read-only afterwards
    pub registry: Arc<CommandRegistry>,
    /// Ed25519 verifier for inbound webhook signatures
    pub verifier: Arc<SignatureVerifier>,
    /// Discord REST client used by handlers for followup calls
    pub rest: Arc<RestClient>,
    /// Broadcast channel for non-command interaction traffic
    pub events: InteractionEvents,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state.
    ///
    /// Fails if the configured public key is not a valid Ed25519 key.
    pub fn new(config: Config, registry: CommandRegistry) -> anyhow::Result<Self> {
        let verifier = SignatureVerifier::from_hex(&config.discord_public_key)?;
        let rest = RestClient::new(&config);

        Ok(Self {
            registry: Arc::new(registry),
            verifier: Arc::new(verifier),
            rest: Arc::new(rest),
            events: InteractionEvents::new(),
            config: Arc::new(config),
        })
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Webhook route behind the signature middleware; signature failures
    // must reject before the body is ever parsed
    let webhook_routes = Router::new()
        .route("/discord/webhook", post(interactions::interaction_webhook))
        .layer(from_fn_with_state(
            state.clone(),
            interactions::verify_signature,
        ));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .merge(webhook_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
