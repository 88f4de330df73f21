//! Domain types shared by the relay pipeline and the Telegram transport.
//!
//! None of these types depend on teloxide; the transport converts its update
//! payloads into [`RawReactionChange`] before anything else sees them.

use std::fmt;
use std::str::FromStr;

/// Identifier of a monitored chat (channel, group or supergroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub i64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// The single recipient of every notification: the administrator's user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdminTarget(pub i64);

impl fmt::Display for AdminTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user whose reaction changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDescriptor {
    /// Numeric Telegram user id.
    pub id: u64,
    /// Public username without the leading `@`.
    pub username: Option<String>,
    /// First name, always present on Telegram users.
    pub first_name: String,
    /// Optional last name.
    pub last_name: Option<String>,
}

/// One entry of a reaction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionKind {
    /// A standard emoji reaction carrying the literal emoji.
    Emoji(String),
    /// Custom emoji, paid star or any other non-emoji reaction.
    Other,
}

/// A reaction-change payload as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReactionChange {
    /// Chat the reacted message belongs to.
    pub channel_id: ChannelId,
    /// Acting user; absent when the reaction was made anonymously.
    pub user: Option<UserDescriptor>,
    /// Identifier of the reacted message.
    pub message_id: i32,
    /// Reactions after the change, in transport order.
    pub new_reaction: Vec<ReactionKind>,
    /// Reactions before the change, in transport order.
    pub old_reaction: Vec<ReactionKind>,
}

/// An update handed to the relay by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A reaction on a message changed.
    ReactionChange(RawReactionChange),
    /// Any update without a reaction-change payload.
    Other,
}

impl InboundEvent {
    /// The reaction-change payload, if this event carries one.
    pub fn reaction_change(&self) -> Option<&RawReactionChange> {
        match self {
            Self::ReactionChange(change) => Some(change),
            Self::Other => None,
        }
    }
}

/// Resolved reaction shown in a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionLabel {
    /// The emoji found in the payload.
    Emoji(String),
    /// A reaction was present but none of the inspected entries was an emoji.
    Unknown,
}

impl fmt::Display for ReactionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoji(emoji) => f.write_str(emoji),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// A normalized reaction, built per event and consumed by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    /// Chat the reaction happened in.
    pub channel_id: ChannelId,
    /// Acting user, copied verbatim from the payload.
    pub user: UserDescriptor,
    /// Identifier of the reacted message.
    pub message_id: i32,
    /// Resolved reaction.
    pub label: ReactionLabel,
}

/// A formatted notification addressed to the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// Recipient.
    pub target: AdminTarget,
    /// Plain-text body.
    pub text: String,
}
