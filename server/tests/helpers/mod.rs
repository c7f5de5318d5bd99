//! Reusable test helpers for HTTP integration tests.
//!
//! `TestApp` builds the full axum router around a freshly generated Ed25519
//! keypair and signs webhook requests the way Discord does.
//! `spawn_capture_server` stands in for Discord's REST API and records every
//! call it receives.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{self, Method, Request, Response, StatusCode};
use axum::routing::any;
use axum::{Json, Router};
use ed25519_dalek::{Signer, SigningKey};
use http_body_util::BodyExt;
use rand::rngs::OsRng;
use tower::ServiceExt;

use ig_server::api::{create_router, AppState};
use ig_server::commands;
use ig_server::config::Config;
use ig_server::interactions::CommandRegistry;

/// A gateway instance under test, plus the signing key Discord would hold.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    signing_key: SigningKey,
}

impl TestApp {
    /// Create a test app with the built-in command set and default config.
    pub fn new() -> Self {
        Self::with_parts(
            Config::default_for_test(),
            commands::build_registry().expect("failed to build registry"),
        )
    }

    /// Create a test app with a custom registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self::with_parts(Config::default_for_test(), registry)
    }

    /// Create a test app with custom config and registry.
    ///
    /// The configured public key is replaced with the verifying key of a
    /// freshly generated keypair so `signed_webhook` requests pass.
    pub fn with_parts(mut config: Config, registry: CommandRegistry) -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        config.discord_public_key = hex::encode(signing_key.verifying_key().to_bytes());

        let state = AppState::new(config, registry).expect("failed to build app state");
        let router = create_router(state.clone());

        Self {
            router,
            state,
            signing_key,
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// A webhook POST carrying a valid signature over the given JSON body.
    pub fn signed_webhook(&self, body: &serde_json::Value) -> Request<Body> {
        self.signed_webhook_raw(serde_json::to_vec(body).unwrap())
    }

    /// A webhook POST carrying a valid signature over arbitrary raw bytes.
    pub fn signed_webhook_raw(&self, payload: Vec<u8>) -> Request<Body> {
        let timestamp = "1700000000";
        let message = [timestamp.as_bytes(), payload.as_slice()].concat();
        let signature = hex::encode(self.signing_key.sign(&message).to_bytes());

        Self::request(Method::POST, "/discord/webhook")
            .header("X-Signature-Ed25519", signature)
            .header("X-Signature-Timestamp", timestamp)
            .header("Content-Type", "application/json")
            .body(Body::from(payload))
            .unwrap()
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }
}

/// Read a response body as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// One request captured by the stand-in Discord server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

/// Spawn a local server that records every request it receives.
///
/// Returns its base URL (to use as `Config::api_base`) and the capture log.
pub async fn spawn_capture_server() -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    let captured: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let router = Router::new().fallback(any(
        move |method: Method, uri: http::Uri, Json(body): Json<serde_json::Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(CapturedRequest {
                    method: method.to_string(),
                    path: uri.path().to_string(),
                    body,
                });
                StatusCode::NO_CONTENT
            }
        },
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind capture server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}
