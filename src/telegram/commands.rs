//! Admin slash commands: `/start`, `/addchannel`, `/removechannel`.
//!
//! Parsing produces a closed [`AdminCommand`]; [`handle_command`] applies it
//! to the [`WatchList`] and returns the plain-text replies to send back, in
//! order.

use tracing::{debug, info};

use crate::relay::WatchList;
use crate::types::ChannelId;

/// First `/start` reply.
pub const START_GREETING: &str =
    "Hello! I will notify you about reactions to posts in the channels I manage.";

/// Second `/start` reply.
pub const START_INSTRUCTIONS: &str = "Add me to the group or channel and give me admin rights!";

/// Why a channel argument could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// No argument followed the command.
    #[error("missing channel id argument")]
    MissingArgument,

    /// The argument is not a signed integer.
    #[error("invalid channel id: {0:?}")]
    InvalidArgument(String),
}

/// A recognised admin command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// `/start`: informational replies only.
    Start,
    /// `/addchannel <channel_id>`.
    AddChannel(Result<ChannelId, CommandError>),
    /// `/removechannel <channel_id>`.
    RemoveChannel(Result<ChannelId, CommandError>),
}

impl AdminCommand {
    /// Parse message text into a command.
    ///
    /// Accepts an optional `@botname` suffix on the command word. Only the
    /// first whitespace-separated argument is used; extra arguments are
    /// ignored. Returns `None` for plain text and unknown commands.
    pub fn parse(text: &str) -> Option<Self> {
        let without_slash = text.trim_start().strip_prefix('/')?;
        let mut words = without_slash.split_whitespace();
        let full_command = words.next()?;
        let command = full_command.split('@').next().unwrap_or(full_command);
        let argument = words.next();

        match command {
            "start" => Some(Self::Start),
            "addchannel" => Some(Self::AddChannel(parse_channel_id(argument))),
            "removechannel" => Some(Self::RemoveChannel(parse_channel_id(argument))),
            _ => None,
        }
    }

    /// Command word without the slash.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::AddChannel(_) => "addchannel",
            Self::RemoveChannel(_) => "removechannel",
        }
    }

    /// Usage line shown when the argument is missing or malformed.
    pub fn usage(&self) -> String {
        match self {
            Self::Start => "/start".to_owned(),
            Self::AddChannel(_) | Self::RemoveChannel(_) => {
                format!("Usage: /{} <channel_id>", self.name())
            }
        }
    }
}

fn parse_channel_id(argument: Option<&str>) -> Result<ChannelId, CommandError> {
    let raw = argument.ok_or(CommandError::MissingArgument)?;
    raw.parse()
        .map_err(|_| CommandError::InvalidArgument(raw.to_owned()))
}

/// Apply `command` to `watchlist` and return the replies to send, in order.
pub fn handle_command(command: &AdminCommand, watchlist: &WatchList) -> Vec<String> {
    match command {
        AdminCommand::Start => vec![START_GREETING.to_owned(), START_INSTRUCTIONS.to_owned()],
        AdminCommand::AddChannel(Ok(id)) => {
            if watchlist.add(*id) {
                info!(channel_id = %id, monitored = watchlist.len(), "channel added");
                vec![format!("Channel ID {id} added to monitoring list.")]
            } else {
                vec![format!("Channel ID {id} is already monitored.")]
            }
        }
        AdminCommand::RemoveChannel(Ok(id)) => {
            if watchlist.remove(*id) {
                info!(channel_id = %id, monitored = watchlist.len(), "channel removed");
                vec![format!("Channel ID {id} removed from monitoring list.")]
            } else {
                vec![format!("Channel ID {id} is not in monitoring list.")]
            }
        }
        AdminCommand::AddChannel(Err(e)) | AdminCommand::RemoveChannel(Err(e)) => {
            debug!(command = command.name(), error = %e, "rejected command argument");
            vec![command.usage()]
        }
    }
}
