//! Webhook handler - one Telegram update in, at most one reply out.
//!
//! This module handles:
//! - Method routing (GET liveness, POST updates, everything else 405)
//! - Update validation (malformed updates are acknowledged and dropped)
//! - Command dispatch and feed lookup
//! - Best-effort delivery of the reply

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::commands::{Command, parse_command};
use super::{helpers, parsing};
use crate::clients::build_http_client;
use crate::core::config::AppConfig;
use crate::core::models::OutgoingReply;
use crate::errors::BotError;
use crate::feed::{BloggerFeed, FeedSource};
use crate::telegram::formatter::{
    FETCH_ERROR_TEXT, HELP_TEXT, LIVENESS_TEXT, MOVIE_USAGE_TEXT, NOT_FOUND_TEXT, WELCOME_TEXT,
    format_entry,
};
use crate::telegram::{Notifier, TelegramClient, parse_incoming_message};

pub use self::function_handler as handler;

/// Everything a request needs, built once per process.
pub struct WebhookApp {
    config: AppConfig,
    feed: Box<dyn FeedSource>,
    notifier: Box<dyn Notifier>,
}

impl WebhookApp {
    /// Wire the Blogger feed and Telegram client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self, BotError> {
        let http = build_http_client(&config)?;
        let feed = BloggerFeed::new(http.clone(), &config);
        let notifier = TelegramClient::new(http, &config);

        Ok(Self::with_components(
            config,
            Box::new(feed),
            Box::new(notifier),
        ))
    }

    #[must_use]
    pub fn with_components(
        config: AppConfig,
        feed: Box<dyn FeedSource>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            feed,
            notifier,
        }
    }

    /// Route one Lambda HTTP event and build its response.
    pub async fn handle(&self, payload: &Value) -> Value {
        let method = parsing::request_method(payload).unwrap_or("");

        if method.eq_ignore_ascii_case("GET") {
            return helpers::ok_text(LIVENESS_TEXT);
        }

        if method.eq_ignore_ascii_case("POST") {
            return self.handle_update(payload).await;
        }

        warn!(method = %method, "Rejecting unsupported method");
        helpers::method_not_allowed()
    }

    async fn handle_update(&self, payload: &Value) -> Value {
        let message = match parsing::extract_body(payload)
            .and_then(|body| parse_incoming_message(&body))
        {
            Ok(message) => message,
            Err(e) => {
                info!("Ignoring update: {}", e);
                return helpers::ok_ignored();
            }
        };

        let update_id = message.update_id;
        let text = self.reply_text(&message.text).await;
        let reply = OutgoingReply::html(
            message.chat_id,
            text,
            self.config.disable_link_preview,
        );

        if let Err(e) = self.notifier.send(&reply).await {
            error!(?update_id, chat_id = %reply.chat_id, "Failed to send reply: {}", e);
        } else {
            info!(?update_id, chat_id = %reply.chat_id, "Reply sent");
        }

        helpers::ok_ack()
    }

    /// Compute the reply for a message's trimmed text.
    ///
    /// Feed faults are logged and answered with the generic error text.
    pub async fn reply_text(&self, text: &str) -> String {
        let query = match parse_command(text) {
            Command::Start => return WELCOME_TEXT.to_string(),
            Command::Help => return HELP_TEXT.to_string(),
            Command::MovieUsage => return MOVIE_USAGE_TEXT.to_string(),
            Command::Search(query) => query,
        };

        match self.feed.lookup(&query).await {
            Ok(Some(entry)) => {
                info!(query = %query, title = %entry.title, "Feed match");
                format_entry(&entry)
            }
            Ok(None) => {
                info!(query = %query, "No feed match");
                NOT_FOUND_TEXT.to_string()
            }
            Err(e) => {
                error!(query = %query, "Feed lookup failed: {}", e);
                FETCH_ERROR_TEXT.to_string()
            }
        }
    }
}

/// Lambda handler for the webhook entrypoint.
///
/// Always returns `Ok`: every outcome, including faults, is expressed as an
/// HTTP response.
///
/// # Errors
///
/// Never fails; the `Result` is what `lambda_runtime::service_fn` expects.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(app: &WebhookApp, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(app.handle(&event.payload).await)
}
