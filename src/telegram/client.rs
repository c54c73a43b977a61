//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot answers each update with exactly
//! one message and never reads anything back from Telegram.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::config::AppConfig;
use crate::core::models::OutgoingReply;
use crate::errors::BotError;

/// Delivers a reply to a chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// # Errors
    ///
    /// Returns `BotError::DeliveryError` if the platform did not accept the
    /// message.
    async fn send(&self, reply: &OutgoingReply) -> Result<(), BotError>;
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramClient {
    http: Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            api_url: config.telegram_api_url.clone(),
            token: config.bot_token.clone(),
        }
    }

    /// Full URL of a Bot API method, e.g. `.../bot<TOKEN>/sendMessage`.
    #[must_use]
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Post a message through `sendMessage`.
    ///
    /// # Errors
    ///
    /// Returns `BotError::DeliveryError` on transport failure, a non-2xx
    /// status, or a body with `"ok": false`.
    pub async fn send_message(&self, reply: &OutgoingReply) -> Result<(), BotError> {
        let resp = self
            .http
            .post(self.method_url("sendMessage"))
            .json(reply)
            .send()
            .await
            .map_err(|e| BotError::DeliveryError(format!("sendMessage request failed: {e}")))?;

        let status = resp.status();
        // Telegram reports most failures as 4xx with an `ok: false` body, so
        // try to read the description before looking at the status.
        let body: Option<SendMessageResponse> = resp.json().await.ok();

        match body {
            Some(SendMessageResponse { ok: true, .. }) if status.is_success() => {
                debug!(chat_id = %reply.chat_id, "sendMessage accepted");
                Ok(())
            }
            Some(SendMessageResponse { description, .. }) => {
                let description = description.unwrap_or_else(|| "unknown".to_string());
                warn!(%status, %description, "sendMessage rejected");
                Err(BotError::DeliveryError(format!(
                    "sendMessage HTTP {status}: {description}"
                )))
            }
            None => Err(BotError::DeliveryError(format!(
                "sendMessage HTTP {status}: unreadable response body"
            ))),
        }
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send(&self, reply: &OutgoingReply) -> Result<(), BotError> {
        self.send_message(reply).await
    }
}
