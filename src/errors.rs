use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Malformed Telegram update: {0}")]
    MalformedUpdate(String),

    #[error("Failed to fetch feed: {0}")]
    FetchError(String),

    #[error("Failed to parse feed: {0}")]
    ParseError(String),

    #[error("Failed to deliver Telegram message: {0}")]
    DeliveryError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::FetchError(error.to_string())
    }
}

impl From<url::ParseError> for BotError {
    fn from(error: url::ParseError) -> Self {
        BotError::FetchError(format!("invalid feed URL: {error}"))
    }
}

impl From<rss::Error> for BotError {
    fn from(error: rss::Error) -> Self {
        BotError::ParseError(error.to_string())
    }
}
