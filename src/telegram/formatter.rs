//! Reply texts sent back to Telegram.
//!
//! All replies use Telegram's HTML parse mode, so anything taken from the
//! feed is escaped before it is embedded.

use crate::core::models::FeedEntry;

pub const LIVENESS_TEXT: &str = "🤖 Movie Bot is live!";

pub const WELCOME_TEXT: &str =
    "👋 Welcome to MovieBot!\nSend a movie name to get the download link.";

pub const HELP_TEXT: &str = "ℹ️ Just send a movie name and I'll look it up.\n\
                             ✅ Example: <code>Jawan 2023</code>\n\
                             🔎 Or use <code>/movie Pathaan</code>";

pub const MOVIE_USAGE_TEXT: &str = "ℹ️ Usage: <code>/movie &lt;name&gt;</code>";

pub const NOT_FOUND_TEXT: &str = "🚫 Movie not found.";

pub const FETCH_ERROR_TEXT: &str = "❌ Error fetching from the movie feed.";

/// Escape the three characters Telegram's HTML mode treats as markup, plus
/// quotes so the text is also safe inside attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `🎬 <b>title</b>` on the first line, the link on the second.
#[must_use]
pub fn format_entry(entry: &FeedEntry) -> String {
    format!(
        "🎬 <b>{}</b>\n🔗 {}",
        escape_html(&entry.title),
        escape_html(&entry.link)
    )
}
