//! Interaction Verification & Dispatch
//!
//! Signature-checked ingestion of Discord interaction webhooks and dispatch
//! to registered command handlers.

pub mod dispatch;
pub mod error;
pub mod events;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod verify;

pub use error::InteractionError;
pub use events::{InteractionEvent, InteractionEvents};
pub use handlers::interaction_webhook;
pub use middleware::verify_signature;
pub use registry::{CommandHandler, CommandRegistry};
pub use verify::SignatureVerifier;
