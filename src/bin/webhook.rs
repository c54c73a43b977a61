use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use moviebot::api::{WebhookApp, handler};
use moviebot::core::config::AppConfig;
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    moviebot::setup_logging();

    let config = AppConfig::from_env()?;
    info!(
        feed_format = ?config.feed_format,
        search_mode = ?config.search_mode,
        "Starting webhook"
    );
    let app = Arc::new(WebhookApp::new(config)?);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let app = Arc::clone(&app);
        async move { handler(&app, event).await }
    }))
    .await
}
