//! Per-event relay state machine.
//!
//! ```text
//! event ──► reaction payload? ──no──► NotReaction
//!                │yes
//!                ▼
//!         channel watched? ──no──► Unmonitored (info log)
//!                │yes
//!                ▼
//!           extract ──none──► NotApplicable
//!                │
//!                ▼
//!         format + send ──► Delivered | DeliveryFailed (warn log)
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::extractor::extract;
use super::formatter::format_notification;
use super::outbound::Outbound;
use super::watchlist::WatchList;
use crate::types::{AdminTarget, ChannelId, InboundEvent};

/// Terminal state reached by one inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event carried no reaction-change payload.
    NotReaction,
    /// The reaction happened in a channel that is not watched.
    Unmonitored(ChannelId),
    /// The payload could not be turned into a notification.
    NotApplicable,
    /// The notification was sent to the admin.
    Delivered,
    /// Sending failed; the event is dropped.
    DeliveryFailed,
}

/// Routes reaction events from watched channels to the admin.
pub struct RelayDispatcher {
    watchlist: Arc<WatchList>,
    outbound: Arc<dyn Outbound>,
    admin: AdminTarget,
}

impl RelayDispatcher {
    /// Create a dispatcher that reports to `admin` through `outbound`.
    pub fn new(watchlist: Arc<WatchList>, outbound: Arc<dyn Outbound>, admin: AdminTarget) -> Self {
        Self {
            watchlist,
            outbound,
            admin,
        }
    }

    /// The watch-list consulted for every event.
    pub fn watchlist(&self) -> &Arc<WatchList> {
        &self.watchlist
    }

    /// Process one event to completion.
    ///
    /// Never fails: delivery errors are logged and reported as
    /// [`DispatchOutcome::DeliveryFailed`] so the caller can move on to the
    /// next update.
    pub async fn dispatch(&self, event: &InboundEvent) -> DispatchOutcome {
        let Some(change) = event.reaction_change() else {
            return DispatchOutcome::NotReaction;
        };

        if !self.watchlist.contains(change.channel_id) {
            info!(channel_id = %change.channel_id, "reaction in unmonitored channel");
            return DispatchOutcome::Unmonitored(change.channel_id);
        }

        let Some(reaction) = extract(Some(change)) else {
            debug!(
                channel_id = %change.channel_id,
                message_id = change.message_id,
                "reaction change without an acting user, skipping"
            );
            return DispatchOutcome::NotApplicable;
        };

        let notification = format_notification(&reaction, self.admin);
        match self
            .outbound
            .send(notification.target, &notification.text)
            .await
        {
            Ok(()) => {
                debug!(
                    channel_id = %reaction.channel_id,
                    message_id = reaction.message_id,
                    user_id = reaction.user.id,
                    label = %reaction.label,
                    "reaction notification delivered"
                );
                DispatchOutcome::Delivered
            }
            Err(e) => {
                warn!(
                    error = %e,
                    update = ?change,
                    "failed to deliver reaction notification"
                );
                DispatchOutcome::DeliveryFailed
            }
        }
    }
}
