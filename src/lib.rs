//! moviebot - a Telegram webhook that answers movie title queries from a
//! blog's syndication feed.
//!
//! Each Lambda invocation carries one Telegram update. The handler parses the
//! message, looks the title up in the blog's RSS or Atom/JSON feed, and posts
//! exactly one reply back through the Bot API.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) as the HTTP front door
//! - reqwest for the feed fetch and `sendMessage`
//! - the rss crate and serde for the two feed formats
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use moviebot::api::WebhookApp;
//! use moviebot::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     moviebot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let app = WebhookApp::new(config)?;
//!
//!     let event = serde_json::json!({
//!         "requestContext": { "http": { "method": "POST" } },
//!         "body": r#"{"message":{"chat":{"id":42},"text":"Jawan"}}"#,
//!     });
//!     let response = app.handle(&event).await;
//!     println!("{response}");
//!
//!     Ok(())
//! }
//! ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod feed;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// moviebot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
