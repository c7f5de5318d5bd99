//! Signature Verification Middleware
//!
//! Buffers the raw request body and checks the Ed25519 signature headers
//! before the webhook handler ever parses the payload. Rejections respond
//! 401 without touching the command registry.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::api::AppState;

use super::error::InteractionError;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Interaction payloads are small; anything larger is not Discord.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Middleware to require a valid webhook signature.
///
/// # Usage
///
/// Apply to the webhook route:
/// ```ignore
/// Router::new()
///     .route("/discord/webhook", post(interaction_webhook))
///     .layer(axum::middleware::from_fn_with_state(state, verify_signature))
/// ```
pub async fn verify_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, InteractionError> {
    let (parts, body) = request.into_parts();

    let signature = header_str(&parts.headers, SIGNATURE_HEADER);
    let timestamp = header_str(&parts.headers, TIMESTAMP_HEADER);

    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!("Webhook request without signature headers");
        return Err(InteractionError::MissingSignatureHeaders);
    };

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| InteractionError::MalformedPayload)?;

    if !state.verifier.verify(&timestamp, &bytes, &signature) {
        warn!("Webhook request with invalid signature");
        return Err(InteractionError::SignatureInvalid);
    }

    // Restore the buffered body for the route handler
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

fn header_str(headers: &axum::http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
