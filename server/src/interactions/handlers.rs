//! Webhook HTTP Handler
//!
//! The single inbound endpoint. The signature middleware has already
//! verified the raw body by the time this runs.

use axum::{body::Bytes, extract::State, Json};
use ig_model::{Interaction, InteractionResponse};
use tracing::{instrument, warn};

use crate::api::AppState;

use super::dispatch;
use super::error::{InteractionError, InteractionResult};

/// POST /discord/webhook
#[instrument(skip(state, body))]
pub async fn interaction_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> InteractionResult<Json<InteractionResponse>> {
    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed interaction payload");
        InteractionError::MalformedPayload
    })?;

    let response = dispatch::dispatch(&state, interaction).await?;
    Ok(Json(response))
}
