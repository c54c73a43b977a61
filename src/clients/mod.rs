//! Shared outbound HTTP client
//!
//! One `reqwest::Client` is built per process and handed to both the feed
//! lookup and the Telegram client, so they share a connection pool.

use reqwest::Client;
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::errors::BotError;

/// Sent with every outbound request. Blogger answers blank agents with 403.
pub const USER_AGENT: &str = concat!("moviebot/", env!("CARGO_PKG_VERSION"));

/// # Errors
///
/// Returns `BotError::ConfigError` if the TLS backend cannot be initialised.
pub fn build_http_client(config: &AppConfig) -> Result<Client, BotError> {
    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| BotError::ConfigError(format!("Failed to build HTTP client: {e}")))
}
