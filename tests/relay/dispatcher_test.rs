//! Tests for `relay::dispatcher` outcomes and send counts.

use std::sync::Arc;

use teloxide::{ApiError, RequestError};

use reactwatch::relay::{DeliveryError, DispatchOutcome, RelayDispatcher, WatchList};
use reactwatch::types::{AdminTarget, ChannelId, InboundEvent, ReactionKind};

use super::support::{change, emoji, user, RecordingOutbound};

const ADMIN: AdminTarget = AdminTarget(1000);

fn setup(outbound: RecordingOutbound) -> (RelayDispatcher, Arc<WatchList>, Arc<RecordingOutbound>) {
    let watchlist = Arc::new(WatchList::new());
    let outbound = Arc::new(outbound);
    let relay = RelayDispatcher::new(Arc::clone(&watchlist), outbound.clone(), ADMIN);
    (relay, watchlist, outbound)
}

fn reaction_on(channel: i64) -> InboundEvent {
    InboundEvent::ReactionChange(change(
        channel,
        Some(user(5, Some("eve"), "Eve")),
        12,
        vec![emoji("👍")],
        vec![],
    ))
}

#[tokio::test]
async fn non_reaction_event_is_ignored() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    assert_eq!(relay.dispatch(&InboundEvent::Other).await, DispatchOutcome::NotReaction);
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn unmonitored_channel_never_sends() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    let outcome = relay.dispatch(&reaction_on(2)).await;
    assert_eq!(outcome, DispatchOutcome::Unmonitored(ChannelId(2)));
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn watched_channel_sends_exactly_once() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    assert_eq!(relay.dispatch(&reaction_on(1)).await, DispatchOutcome::Delivered);

    let sent = outbound.sent();
    assert_eq!(sent.len(), 1);
    let (target, text) = &sent[0];
    assert_eq!(*target, ADMIN);
    assert!(text.contains("Reaction: 👍"));
    assert!(text.contains("https://t.me/eve"));
}

#[tokio::test]
async fn custom_reaction_still_notifies_as_unknown() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    let event = InboundEvent::ReactionChange(change(
        1,
        Some(user(5, None, "Eve")),
        12,
        vec![ReactionKind::Other],
        vec![],
    ));
    assert_eq!(relay.dispatch(&event).await, DispatchOutcome::Delivered);
    assert!(outbound.sent()[0].1.contains("Reaction: Unknown"));
}

#[tokio::test]
async fn anonymous_reaction_is_not_applicable() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    let event = InboundEvent::ReactionChange(change(1, None, 12, vec![emoji("👍")], vec![]));
    assert_eq!(relay.dispatch(&event).await, DispatchOutcome::NotApplicable);
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_is_reported_and_not_retried() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::failing());
    watchlist.add(ChannelId(1));

    assert_eq!(relay.dispatch(&reaction_on(1)).await, DispatchOutcome::DeliveryFailed);
    assert_eq!(outbound.sent().len(), 1);

    // The next event is processed normally.
    assert_eq!(relay.dispatch(&reaction_on(1)).await, DispatchOutcome::DeliveryFailed);
    assert_eq!(outbound.sent().len(), 2);
}

#[test]
fn delivery_error_wraps_telegram_failures() {
    let err: DeliveryError = RequestError::Api(ApiError::ChatNotFound).into();
    assert!(matches!(err, DeliveryError::Telegram(_)));
    assert!(err.to_string().starts_with("telegram request failed"));
}

#[tokio::test]
async fn removing_a_channel_stops_notifications() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));

    assert_eq!(relay.dispatch(&reaction_on(1)).await, DispatchOutcome::Delivered);
    watchlist.remove(ChannelId(1));
    assert_eq!(
        relay.dispatch(&reaction_on(1)).await,
        DispatchOutcome::Unmonitored(ChannelId(1))
    );
    assert_eq!(outbound.sent().len(), 1);
}

#[tokio::test]
async fn concurrent_dispatches_each_send_once() {
    let (relay, watchlist, outbound) = setup(RecordingOutbound::default());
    watchlist.add(ChannelId(1));
    let relay = Arc::new(relay);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let relay = Arc::clone(&relay);
            tokio::spawn(async move { relay.dispatch(&reaction_on(1)).await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.expect("task should join"), DispatchOutcome::Delivered);
    }
    assert_eq!(outbound.sent().len(), 16);
}
