//! Inbound Telegram webhook payloads.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! update is ignored by serde.

use serde::Deserialize;

use crate::core::models::ChatId;
use crate::errors::BotError;

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

/// A message that is worth answering: it has a chat and non-blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Telegram's id for the update, used to correlate log lines.
    pub update_id: Option<i64>,
    pub chat_id: ChatId,
    /// Message text with surrounding whitespace removed.
    pub text: String,
}

/// Extract the chat and trimmed text from a raw webhook body.
///
/// # Errors
///
/// Returns `BotError::MalformedUpdate` when the body is not JSON, has no
/// `message`, no `message.chat.id`, or no non-blank `message.text`.
pub fn parse_incoming_message(body: &str) -> Result<IncomingMessage, BotError> {
    let update: Update = serde_json::from_str(body)
        .map_err(|e| BotError::MalformedUpdate(format!("invalid update JSON: {e}")))?;

    let message = update
        .message
        .ok_or_else(|| BotError::MalformedUpdate("update has no message".to_string()))?;

    let text = message
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| BotError::MalformedUpdate("message has no text".to_string()))?;

    Ok(IncomingMessage {
        update_id: update.update_id,
        chat_id: message.chat.id,
        text: text.to_string(),
    })
}
