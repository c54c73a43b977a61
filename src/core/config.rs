use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::errors::BotError;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Document format served by the feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFormat {
    /// RSS 2.0 XML (`alt=rss`).
    #[default]
    Rss,
    /// Blogger's Atom-as-JSON (`alt=json`).
    AtomJson,
}

impl FeedFormat {
    /// Value of the `alt` query parameter for this format.
    #[must_use]
    pub fn alt_param(self) -> &'static str {
        match self {
            FeedFormat::Rss => "rss",
            FeedFormat::AtomJson => "json",
        }
    }
}

impl FromStr for FeedFormat {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rss" | "xml" => Ok(FeedFormat::Rss),
            "json" | "atom" => Ok(FeedFormat::AtomJson),
            other => Err(BotError::ConfigError(format!(
                "FEED_FORMAT must be `rss` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Where the title match happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Fetch the whole feed and filter titles locally.
    #[default]
    Client,
    /// Let the feed endpoint search (`q=`) and take its first result.
    Server,
}

impl FromStr for SearchMode {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(SearchMode::Client),
            "server" => Ok(SearchMode::Server),
            other => Err(BotError::ConfigError(format!(
                "FEED_SEARCH must be `client` or `server`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub feed_base_url: String,
    pub feed_format: FeedFormat,
    pub search_mode: SearchMode,
    pub max_results: Option<u32>,
    pub telegram_api_url: String,
    pub disable_link_preview: bool,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` if an optional variable is set to a
    /// value that cannot be parsed.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// A missing `BOT_TOKEN` or `BLOG_URL` is only warned about: the calls
    /// that need them fail later and the user gets the generic error reply.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` if an optional variable is set to a
    /// value that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("BOT_TOKEN").unwrap_or_else(|| {
            warn!("BOT_TOKEN is not set; Telegram replies will fail");
            String::new()
        });
        let feed_base_url = lookup("BLOG_URL").unwrap_or_else(|| {
            warn!("BLOG_URL is not set; feed lookups will fail");
            String::new()
        });

        let feed_format = lookup("FEED_FORMAT")
            .map(|v| v.parse::<FeedFormat>())
            .transpose()?
            .unwrap_or_default();
        let search_mode = lookup("FEED_SEARCH")
            .map(|v| v.parse::<SearchMode>())
            .transpose()?
            .unwrap_or_default();

        let max_results = lookup("FEED_MAX_RESULTS")
            .map(|v| {
                v.trim()
                    .parse::<u32>()
                    .map_err(|e| BotError::ConfigError(format!("FEED_MAX_RESULTS: {e}")))
            })
            .transpose()?;

        let disable_link_preview = lookup("DISABLE_LINK_PREVIEW")
            .map(|v| parse_bool("DISABLE_LINK_PREVIEW", &v))
            .transpose()?
            .unwrap_or(false);

        let http_timeout_secs = lookup("HTTP_TIMEOUT_SECS")
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .map_err(|e| BotError::ConfigError(format!("HTTP_TIMEOUT_SECS: {e}")))
            })
            .transpose()?
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        Ok(Self {
            bot_token,
            feed_base_url: feed_base_url.trim_end_matches('/').to_string(),
            feed_format,
            search_mode,
            max_results,
            telegram_api_url: telegram_api_url.trim_end_matches('/').to_string(),
            disable_link_preview,
            http_timeout_secs,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, BotError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(BotError::ConfigError(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, BotError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_required_keys_are_set() {
        let config = config_from(&[("BOT_TOKEN", "123:abc"), ("BLOG_URL", "https://blog.example/")])
            .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.feed_base_url, "https://blog.example");
        assert_eq!(config.feed_format, FeedFormat::Rss);
        assert_eq!(config.search_mode, SearchMode::Client);
        assert_eq!(config.max_results, None);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert!(!config.disable_link_preview);
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn missing_token_and_blog_url_are_not_fatal() {
        let config = config_from(&[]).unwrap();
        assert!(config.bot_token.is_empty());
        assert!(config.feed_base_url.is_empty());
    }

    #[test]
    fn optional_keys_are_parsed() {
        let config = config_from(&[
            ("FEED_FORMAT", "JSON"),
            ("FEED_SEARCH", "server"),
            ("FEED_MAX_RESULTS", "50"),
            ("DISABLE_LINK_PREVIEW", "true"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("TELEGRAM_API_URL", "http://127.0.0.1:9000/"),
        ])
        .unwrap();

        assert_eq!(config.feed_format, FeedFormat::AtomJson);
        assert_eq!(config.search_mode, SearchMode::Server);
        assert_eq!(config.max_results, Some(50));
        assert!(config.disable_link_preview);
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.telegram_api_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn bad_optional_values_are_config_errors() {
        for pairs in [
            [("FEED_FORMAT", "yaml")],
            [("FEED_SEARCH", "both")],
            [("FEED_MAX_RESULTS", "many")],
            [("DISABLE_LINK_PREVIEW", "maybe")],
            [("HTTP_TIMEOUT_SECS", "soon")],
        ] {
            match config_from(&pairs) {
                Err(BotError::ConfigError(_)) => {}
                other => panic!("Expected ConfigError for {pairs:?}, got: {other:?}"),
            }
        }
    }
}
