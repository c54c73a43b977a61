//! All Telegram-specific functionality

pub mod client;
pub mod formatter;
pub mod update;

pub use client::{Notifier, TelegramClient};
pub use update::{IncomingMessage, parse_incoming_message};
