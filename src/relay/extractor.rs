//! Reaction extraction: raw reaction-change payload to [`ReactionEvent`].

use crate::types::{RawReactionChange, ReactionEvent, ReactionKind, ReactionLabel};

/// Normalize a reaction-change payload.
///
/// Returns `None` (not applicable) when there is no payload or no acting
/// user. Otherwise the label is resolved with a fixed precedence:
///
/// 1. first entry of `new_reaction`, if it is an emoji;
/// 2. first entry of `old_reaction`, if it is an emoji;
/// 3. [`ReactionLabel::Unknown`].
///
/// Only the first entry of each list is looked at. Preferring the new list
/// means an added reaction reports what was added, while a removal (empty
/// new list) reports what was removed.
pub fn extract(payload: Option<&RawReactionChange>) -> Option<ReactionEvent> {
    let change = payload?;
    let user = change.user.clone()?;

    let label = first_emoji(&change.new_reaction)
        .or_else(|| first_emoji(&change.old_reaction))
        .map_or(ReactionLabel::Unknown, |emoji| {
            ReactionLabel::Emoji(emoji.to_owned())
        });

    Some(ReactionEvent {
        channel_id: change.channel_id,
        user,
        message_id: change.message_id,
        label,
    })
}

fn first_emoji(reactions: &[ReactionKind]) -> Option<&str> {
    match reactions.first() {
        Some(ReactionKind::Emoji(emoji)) => Some(emoji.as_str()),
        Some(ReactionKind::Other) | None => None,
    }
}
