//! Feed lookup against a Blogger-style syndication endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::{FeedParser, parser_for};
use crate::core::config::{AppConfig, FeedFormat, SearchMode};
use crate::core::models::FeedEntry;
use crate::errors::BotError;

/// Path of the posts feed below the blog root.
pub const FEED_PATH: &str = "/feeds/posts/default";

/// Finds the post that answers a query.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns `Ok(None)` when no entry matches.
    ///
    /// # Errors
    ///
    /// `BotError::FetchError` if the feed cannot be retrieved,
    /// `BotError::ParseError` if it is not in the expected format.
    async fn lookup(&self, query: &str) -> Result<Option<FeedEntry>, BotError>;
}

/// Pick the answer out of a parsed feed.
///
/// In client mode the first title containing `query` (case-insensitive) wins;
/// in server mode the endpoint already searched, so its first result is taken
/// as is.
#[must_use]
pub fn select_entry(entries: Vec<FeedEntry>, query: &str, mode: SearchMode) -> Option<FeedEntry> {
    match mode {
        SearchMode::Server => entries.into_iter().next(),
        SearchMode::Client => entries.into_iter().find(|e| e.title_matches(query)),
    }
}

pub struct BloggerFeed {
    http: Client,
    base_url: String,
    format: FeedFormat,
    search_mode: SearchMode,
    max_results: Option<u32>,
    parser: Box<dyn FeedParser>,
}

impl BloggerFeed {
    #[must_use]
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.feed_base_url.clone(),
            format: config.feed_format,
            search_mode: config.search_mode,
            max_results: config.max_results,
            parser: parser_for(config.feed_format),
        }
    }

    /// Build the request URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns `BotError::FetchError` if the configured base URL is not a
    /// valid absolute URL.
    pub fn feed_url(&self, query: &str) -> Result<Url, BotError> {
        let mut url = Url::parse(&format!("{}{FEED_PATH}", self.base_url))?;
        {
            let mut pairs = url.query_pairs_mut();
            if self.search_mode == SearchMode::Server {
                pairs.append_pair("q", query);
            }
            pairs.append_pair("alt", self.format.alt_param());
            if let Some(max) = self.max_results {
                pairs.append_pair("max-results", &max.to_string());
            }
        }
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>, BotError> {
        let resp = self.http.get(url).send().await?;

        if !resp.status().is_success() {
            return Err(BotError::FetchError(format!("feed HTTP {}", resp.status())));
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl FeedSource for BloggerFeed {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn lookup(&self, query: &str) -> Result<Option<FeedEntry>, BotError> {
        let url = self.feed_url(query)?;
        debug!(%url, "Fetching feed");

        let body = self.fetch(url).await?;
        let entries = self.parser.parse(&body)?;
        info!(entries = entries.len(), "Feed parsed");

        Ok(select_entry(entries, query, self.search_mode))
    }
}
