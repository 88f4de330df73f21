//! Tests for `relay::extractor` label precedence.

use reactwatch::relay::extractor::extract;
use reactwatch::types::{ChannelId, ReactionKind, ReactionLabel};

use super::support::{change, emoji, user};

fn label_of(
    new_reaction: Vec<ReactionKind>,
    old_reaction: Vec<ReactionKind>,
) -> Option<ReactionLabel> {
    let payload = change(-100, Some(user(1, None, "Ann")), 9, new_reaction, old_reaction);
    extract(Some(&payload)).map(|event| event.label)
}

#[test]
fn new_emoji_is_used() {
    assert_eq!(
        label_of(vec![emoji("👍")], vec![]),
        Some(ReactionLabel::Emoji("👍".to_owned()))
    );
}

#[test]
fn old_emoji_is_used_when_new_is_empty() {
    assert_eq!(
        label_of(vec![], vec![emoji("❤")]),
        Some(ReactionLabel::Emoji("❤".to_owned()))
    );
}

#[test]
fn new_wins_over_old() {
    assert_eq!(
        label_of(vec![emoji("😀")], vec![emoji("😢")]),
        Some(ReactionLabel::Emoji("😀".to_owned()))
    );
}

#[test]
fn non_emoji_new_falls_through_to_old() {
    assert_eq!(
        label_of(vec![ReactionKind::Other], vec![emoji("🎉")]),
        Some(ReactionLabel::Emoji("🎉".to_owned()))
    );
}

#[test]
fn custom_reaction_is_unknown() {
    assert_eq!(
        label_of(vec![ReactionKind::Other], vec![]),
        Some(ReactionLabel::Unknown)
    );
}

#[test]
fn both_lists_empty_is_unknown() {
    assert_eq!(label_of(vec![], vec![]), Some(ReactionLabel::Unknown));
}

#[test]
fn only_first_entry_is_consulted() {
    assert_eq!(
        label_of(
            vec![ReactionKind::Other, emoji("👍")],
            vec![ReactionKind::Other, emoji("👎")]
        ),
        Some(ReactionLabel::Unknown)
    );
}

#[test]
fn missing_payload_is_not_applicable() {
    assert!(extract(None).is_none());
}

#[test]
fn anonymous_actor_is_not_applicable() {
    let payload = change(-100, None, 9, vec![emoji("👍")], vec![]);
    assert!(extract(Some(&payload)).is_none());
}

#[test]
fn user_and_ids_are_copied_verbatim() {
    let mut actor = user(42, Some("bob"), "Bob");
    actor.last_name = Some("Stone".to_owned());
    let payload = change(-1001, Some(actor.clone()), 77, vec![emoji("👍")], vec![]);

    let event = extract(Some(&payload)).expect("should extract");
    assert_eq!(event.channel_id, ChannelId(-1001));
    assert_eq!(event.message_id, 77);
    assert_eq!(event.user, actor);
}
