//! Plain-text rendering of reaction notifications.

use crate::types::{AdminTarget, NotificationMessage, ReactionEvent, UserDescriptor};

/// Render `event` as the notification sent to `target`.
///
/// The body is plain text (no parse mode), one field per line:
///
/// ```text
/// ⚠️ Reaction Update in Channel -1001:
/// User: Ann Lee (@ann)
/// User ID: 7
/// User Link: https://t.me/ann
/// Message ID: 55
/// Reaction: 🔥
/// ```
pub fn format_notification(event: &ReactionEvent, target: AdminTarget) -> NotificationMessage {
    let user = &event.user;
    let handle = match user.username.as_deref() {
        Some(username) => username.to_owned(),
        None => user.id.to_string(),
    };

    let text = format!(
        "\u{26a0}\u{fe0f} Reaction Update in Channel {channel}:\n\
         User: {name} (@{handle})\n\
         User ID: {id}\n\
         User Link: {link}\n\
         Message ID: {message_id}\n\
         Reaction: {label}\n",
        channel = event.channel_id,
        name = display_name(user),
        id = user.id,
        link = user_link(user),
        message_id = event.message_id,
        label = event.label,
    );

    NotificationMessage { target, text }
}

/// First name, followed by the last name when there is one.
pub fn display_name(user: &UserDescriptor) -> String {
    match user.last_name.as_deref() {
        Some(last) if !last.is_empty() => format!("{} {last}", user.first_name),
        _ => user.first_name.clone(),
    }
}

/// Clickable reference to the user: their public profile when they have a
/// username, otherwise a `tg://` deep link on the numeric id.
pub fn user_link(user: &UserDescriptor) -> String {
    match user.username.as_deref() {
        Some(username) => format!("https://t.me/{username}"),
        None => format!("tg://user?id={}", user.id),
    }
}
