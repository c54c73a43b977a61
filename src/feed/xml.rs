use rss::Channel;

use super::FeedParser;
use crate::core::models::FeedEntry;
use crate::errors::BotError;

/// Parses RSS 2.0 documents (`rss.channel.item[]`).
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlFeedParser;

impl FeedParser for XmlFeedParser {
    fn parse(&self, body: &[u8]) -> Result<Vec<FeedEntry>, BotError> {
        let channel = Channel::read_from(body)?;

        Ok(channel
            .items()
            .iter()
            .filter_map(|item| {
                let title = item.title()?.trim();
                let link = item.link()?.trim();
                if title.is_empty() || link.is_empty() {
                    return None;
                }
                Some(FeedEntry::new(title, link))
            })
            .collect())
    }
}
