//! Interaction Dispatch
//!
//! Branches on the interaction type and produces the synchronous webhook
//! reply: pong for pings, the handler's own response for application
//! commands, a deferred acknowledgment (plus one broadcast event) for
//! everything else.

use ig_model::{Interaction, InteractionResponse, InteractionType};
use tracing::{debug, info};

use crate::api::AppState;

use super::error::{InteractionError, InteractionResult};

/// Dispatch a verified, parsed interaction.
///
/// Performs at most one handler invocation and at most one event emission;
/// no storage, no retries. `CommandNotFound` propagates - an unregistered
/// command name is a configuration error, not a runtime condition to paper
/// over.
pub async fn dispatch(
    state: &AppState,
    interaction: Interaction,
) -> InteractionResult<InteractionResponse> {
    match interaction.kind {
        InteractionType::Ping => {
            debug!("Acknowledging ping");
            Ok(InteractionResponse::pong())
        }
        InteractionType::ApplicationCommand => {
            let name = interaction
                .command_name()
                .ok_or(InteractionError::MissingCommandName)?
                .to_string();
            let handler = state.registry.resolve(&name)?;

            info!(command = %name, user = ?interaction.invoker_id(), "Dispatching command");
            let response = handler
                .handle(&interaction, &state.rest)
                .await
                .map_err(InteractionError::Handler)?;
            Ok(response)
        }
        InteractionType::Other(kind) => {
            debug!(kind, "Deferring unrouted interaction type");
            state.events.publish(interaction);
            Ok(InteractionResponse::deferred())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::interactions::CommandRegistry;
    use ig_model::InteractionResponseType;

    fn state() -> AppState {
        AppState::new(Config::default_for_test(), CommandRegistry::new()).unwrap()
    }

    fn interaction(body: serde_json::Value) -> Interaction {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn ping_gets_pong() {
        let response = dispatch(&state(), interaction(serde_json::json!({ "type": 1 })))
            .await
            .unwrap();
        assert_eq!(response.kind, InteractionResponseType::Pong);
    }

    #[tokio::test]
    async fn unknown_type_defers_and_publishes_once() {
        let state = state();
        let mut rx = state.events.subscribe();

        let response = dispatch(
            &state,
            interaction(serde_json::json!({ "type": 3, "token": "t" })),
        )
        .await
        .unwrap();

        assert_eq!(
            response.kind,
            InteractionResponseType::DeferredChannelMessageWithSource
        );
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unregistered_command_is_not_found() {
        let err = dispatch(
            &state(),
            interaction(serde_json::json!({
                "type": 2,
                "token": "t",
                "data": { "name": "missing" },
            })),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, InteractionError::CommandNotFound(name) if name == "missing"));
    }

    #[tokio::test]
    async fn command_without_name_is_rejected() {
        let err = dispatch(
            &state(),
            interaction(serde_json::json!({ "type": 2, "token": "t" })),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, InteractionError::MissingCommandName));
    }
}
