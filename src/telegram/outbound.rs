//! Telegram implementation of the outbound messaging seam.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::relay::{DeliveryError, Outbound};
use crate::types::AdminTarget;

/// Sends notifications as plain-text private messages through the Bot API.
#[derive(Clone)]
pub struct TelegramOutbound {
    bot: Bot,
}

impl TelegramOutbound {
    /// Wrap a bot handle. The handle is cheap to clone and shared with the
    /// dispatcher.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbound for TelegramOutbound {
    async fn send(&self, target: AdminTarget, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(ChatId(target.0), text).await?;
        Ok(())
    }
}
