//! Messaging gateway: Telegram Bot API wire types and a long-polling client.
//! The rest of the crate treats photo attachments and message handles as the
//! opaque references this module exposes; no transport detail leaks past it.

pub mod client;
pub mod error;
pub mod types;

pub use client::TelegramClient;
pub use error::GatewayError;
