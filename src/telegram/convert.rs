//! Conversion from teloxide update payloads into domain types.

use teloxide::types::{MessageReactionUpdated, ReactionType, User};

use crate::types::{ChannelId, RawReactionChange, ReactionKind, UserDescriptor};

/// Convert a `message_reaction` update into a [`RawReactionChange`].
///
/// Reaction lists keep their order. Anonymous reactions (sent on behalf of
/// a chat) carry no user.
pub fn reaction_change_from(update: &MessageReactionUpdated) -> RawReactionChange {
    RawReactionChange {
        channel_id: ChannelId(update.chat.id.0),
        user: update.user.as_ref().map(user_descriptor_from),
        message_id: update.message_id.0,
        new_reaction: update.new_reaction.iter().map(reaction_kind_from).collect(),
        old_reaction: update.old_reaction.iter().map(reaction_kind_from).collect(),
    }
}

/// Copy the fields the notification needs from a Telegram user.
pub fn user_descriptor_from(user: &User) -> UserDescriptor {
    UserDescriptor {
        id: user.id.0,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

fn reaction_kind_from(reaction: &ReactionType) -> ReactionKind {
    match reaction {
        ReactionType::Emoji { emoji } => ReactionKind::Emoji(emoji.clone()),
        _ => ReactionKind::Other,
    }
}
