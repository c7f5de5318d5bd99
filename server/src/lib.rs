//! Interactions Gateway Server
//!
//! Receives Discord interaction webhooks, verifies their Ed25519 signatures,
//! and dispatches them to registered command handlers.

pub mod api;
pub mod commands;
pub mod config;
pub mod discord;
pub mod interactions;
