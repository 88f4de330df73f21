//! Outbound messaging seam.
//!
//! The dispatcher only knows this trait; the Telegram implementation lives
//! in [`crate::telegram::outbound`] and tests substitute a recording double.

use async_trait::async_trait;

use crate::types::AdminTarget;

/// Errors produced when a notification cannot be delivered.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The Telegram Bot API request failed.
    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Sends plain-text messages to a single recipient.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Deliver `text` to `target` once. Implementations must not retry.
    async fn send(&self, target: AdminTarget, text: &str) -> Result<(), DeliveryError>;
}
