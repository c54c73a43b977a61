use std::fmt;

use serde::{Deserialize, Serialize};

/// One published post from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
}

impl FeedEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Case-insensitive substring test of `query` against the title.
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Telegram chat identifier. Usually numeric; `@channelusername` is also
/// accepted by the Bot API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
}

/// A message ready to be handed to the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingReply {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: bool,
}

impl OutgoingReply {
    #[must_use]
    pub fn html(chat_id: ChatId, text: String, disable_web_page_preview: bool) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: Some(ParseMode::Html),
            disable_web_page_preview,
        }
    }
}
