//! Telegram transport: bot dispatcher, admin commands and update conversion.
//!
//! Two update kinds matter: messages (admin slash commands) and
//! `message_reaction` updates (forwarded to the relay). Teloxide infers the
//! `allowed_updates` polling parameter from the handler tree, so registering
//! the reaction branch is what makes Telegram deliver reaction updates.

use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::MessageReactionUpdated;
use tracing::{debug, info, warn};

use crate::relay::{RelayDispatcher, WatchList};
use crate::types::InboundEvent;

pub mod commands;
pub mod convert;
pub mod outbound;

pub use commands::{handle_command, AdminCommand, CommandError};
pub use convert::reaction_change_from;
pub use outbound::TelegramOutbound;

// ---------------------------------------------------------------------------
// Shared state for handler injection
// ---------------------------------------------------------------------------

/// Shared dependencies injected into teloxide handlers via `dptree::deps!`.
#[derive(Clone)]
struct SharedState {
    relay: Arc<RelayDispatcher>,
    watchlist: Arc<WatchList>,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Run the Telegram long-polling loop.
///
/// Commands mutate the relay's watch-list; reaction updates are handed to
/// [`RelayDispatcher::dispatch`]. Each update is handled independently and
/// handler failures are logged, never propagated.
///
/// Blocks until the bot is stopped (Ctrl+C).
pub async fn run_telegram(bot: Bot, relay: Arc<RelayDispatcher>) -> anyhow::Result<()> {
    let shared = SharedState {
        watchlist: Arc::clone(relay.watchlist()),
        relay,
    };

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_message_reaction_updated().endpoint(handle_reaction));

    info!("telegram dispatcher starting");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![shared])
        .default_handler(|update: Arc<Update>| async move {
            debug!(update_id = ?update.id, "ignoring unsupported update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("telegram dispatcher stopped");
    Ok(())
}

// ---------------------------------------------------------------------------
// Message handler
// ---------------------------------------------------------------------------

/// Handle an incoming message: run it as an admin command if it is one.
async fn handle_message(bot: Bot, msg: Message, state: SharedState) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(command) = AdminCommand::parse(text) else {
        debug!(chat_id = msg.chat.id.0, "not an admin command, ignoring");
        return Ok(());
    };

    info!(
        chat_id = msg.chat.id.0,
        command = command.name(),
        "admin command received"
    );

    for reply in handle_command(&command, &state.watchlist) {
        if let Err(e) = bot.send_message(msg.chat.id, reply).await {
            warn!(error = %e, chat_id = msg.chat.id.0, "failed to send command reply");
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Reaction handler
// ---------------------------------------------------------------------------

/// Convert a reaction update and run it through the relay.
async fn handle_reaction(update: MessageReactionUpdated, state: SharedState) -> ResponseResult<()> {
    let event = InboundEvent::ReactionChange(reaction_change_from(&update));
    let outcome = state.relay.dispatch(&event).await;
    debug!(?outcome, "reaction update processed");
    Ok(())
}
