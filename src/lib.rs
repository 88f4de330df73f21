//! reactwatch — forwards reactions on watched Telegram channels to one admin.
//!
//! The relay pipeline ([`relay`]) is transport-agnostic; [`telegram`] plugs
//! it into teloxide long polling and handles the admin slash commands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod relay;
pub mod telegram;
pub mod types;
