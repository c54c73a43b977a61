//! Blogger's `alt=json` rendering of an Atom feed.
//!
//! ```json
//! {"feed": {"entry": [{"title": {"$t": "..."},
//!                      "link": [{"rel": "alternate", "href": "..."}]}]}}
//! ```

use serde::Deserialize;

use super::FeedParser;
use crate::core::models::FeedEntry;
use crate::errors::BotError;

#[derive(Debug, Deserialize)]
struct AtomDocument {
    feed: AtomFeed,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    // Blogger omits `entry` entirely when a search has no results.
    #[serde(default)]
    entry: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    title: Option<AtomText>,
    #[serde(default)]
    link: Vec<AtomLink>,
}

#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$t", default)]
    t: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl AtomText {
    fn into_value(self) -> Option<String> {
        self.t.or(self.text)
    }
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(default)]
    rel: Option<String>,
    #[serde(default)]
    href: String,
}

impl AtomEntry {
    fn into_feed_entry(self) -> Option<FeedEntry> {
        let title = self.title?.into_value()?.trim().to_string();
        let link = self
            .link
            .into_iter()
            .find(|l| l.rel.as_deref() == Some("alternate"))?
            .href;
        if title.is_empty() || link.is_empty() {
            return None;
        }
        Some(FeedEntry::new(title, link))
    }
}

/// Parses Blogger Atom/JSON documents (`feed.entry[]`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomJsonFeedParser;

impl FeedParser for AtomJsonFeedParser {
    fn parse(&self, body: &[u8]) -> Result<Vec<FeedEntry>, BotError> {
        let doc: AtomDocument = serde_json::from_slice(body)
            .map_err(|e| BotError::ParseError(format!("invalid Atom/JSON feed: {e}")))?;

        Ok(doc
            .feed
            .entry
            .into_iter()
            .filter_map(AtomEntry::into_feed_entry)
            .collect())
    }
}
