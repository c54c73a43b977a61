//! Feed fetching, parsing and title matching

pub mod atom_json;
pub mod lookup;
pub mod xml;

use crate::core::config::FeedFormat;
use crate::core::models::FeedEntry;
use crate::errors::BotError;

pub use atom_json::AtomJsonFeedParser;
pub use lookup::{BloggerFeed, FeedSource, select_entry};
pub use xml::XmlFeedParser;

/// Turns a fetched feed document into entries, in document order.
pub trait FeedParser: Send + Sync {
    /// # Errors
    ///
    /// Returns `BotError::ParseError` if the body is not a document of the
    /// parser's format.
    fn parse(&self, body: &[u8]) -> Result<Vec<FeedEntry>, BotError>;
}

#[must_use]
pub fn parser_for(format: FeedFormat) -> Box<dyn FeedParser> {
    match format {
        FeedFormat::Rss => Box::new(XmlFeedParser),
        FeedFormat::AtomJson => Box::new(AtomJsonFeedParser),
    }
}
