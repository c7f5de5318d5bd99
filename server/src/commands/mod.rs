//! Built-in Command Handlers
//!
//! Each command lives in its own module and exports one handler struct.
//! `build_registry` is the single place the command set is assembled; both
//! the server and the register-commands binary use it so the registered set
//! and the dispatched set cannot drift apart.

use std::sync::Arc;

use crate::interactions::error::InteractionResult;
use crate::interactions::CommandRegistry;

mod hello;

pub use hello::HelloCommand;

/// Build the command registry with all built-in handlers.
pub fn build_registry() -> InteractionResult<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(HelloCommand))?;
    Ok(registry)
}
