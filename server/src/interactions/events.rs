//! Interaction Event Broadcast
//!
//! Non-blocking notification channel for interaction types the dispatcher
//! does not route to a command handler. Subscribers observe generic
//! interaction traffic without owning a registered command; publishing never
//! fails the dispatch, with or without subscribers.

use ig_model::Interaction;
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the broadcast channel; slow subscribers lag, they do not
/// block dispatch.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// An interaction that was acknowledged with a deferred response instead of
/// being routed to a command handler.
#[derive(Debug, Clone)]
pub struct InteractionEvent {
    /// The full parsed interaction envelope.
    pub interaction: Interaction,
}

/// Broadcast publisher for interaction events.
#[derive(Debug, Clone)]
pub struct InteractionEvents {
    sender: broadcast::Sender<InteractionEvent>,
}

impl InteractionEvents {
    /// Create a new event channel.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to interaction events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<InteractionEvent> {
        self.sender.subscribe()
    }

    /// Publish an event; fire-and-forget.
    pub fn publish(&self, interaction: Interaction) {
        let kind = u8::from(interaction.kind);
        // send only errors when there are no subscribers, which is fine
        let subscribers = self
            .sender
            .send(InteractionEvent { interaction })
            .unwrap_or(0);
        debug!(kind, subscribers, "Published interaction event");
    }
}

impl Default for InteractionEvents {
    fn default() -> Self {
        Self::new()
    }
}
