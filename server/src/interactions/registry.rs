//! Command Registry
//!
//! Maps command names to handler instances. Built once at startup, shared
//! read-only behind `Arc` afterwards; registration order is irrelevant to
//! resolution.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use ig_model::{CommandDefinition, Interaction, InteractionResponse};

use crate::discord::RestClient;

use super::error::{InteractionError, InteractionResult};

/// A named, invokable command handler.
///
/// Handlers are stateless with respect to any single request. They receive
/// the full parsed interaction and the REST client for followup calls; the
/// dispatcher does not interpret what they send.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The command definition this handler owns. The name must be unique
    /// across the registry.
    fn definition(&self) -> CommandDefinition;

    /// Execute the command and produce the synchronous webhook reply.
    ///
    /// Discord expects that reply within a few seconds; slow work must
    /// return a deferred acknowledgment and finish via followup out-of-band.
    async fn handle(
        &self,
        interaction: &Interaction,
        rest: &RestClient,
    ) -> anyhow::Result<InteractionResponse>;
}

/// Registry mapping command names to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its declared command name.
    ///
    /// Duplicate names fail loudly: two handlers claiming the same command
    /// is a configuration bug that must surface at startup, not resolve
    /// silently in favor of whichever registered last.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> InteractionResult<()> {
        let name = handler.definition().name;
        match self.handlers.entry(name) {
            Entry::Occupied(entry) => {
                Err(InteractionError::DuplicateCommand(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                entry.insert(handler);
                Ok(())
            }
        }
    }

    /// Resolve a handler by exact, case-sensitive command name.
    pub fn resolve(&self, name: &str) -> InteractionResult<Arc<dyn CommandHandler>> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| InteractionError::CommandNotFound(name.to_string()))
    }

    /// All registered command definitions (for pushing to Discord).
    #[must_use]
    pub fn definitions(&self) -> Vec<CommandDefinition> {
        self.handlers.values().map(|h| h.definition()).collect()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
