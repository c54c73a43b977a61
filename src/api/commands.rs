//! Command grammar for incoming chat text.
//!
//! `/start` and `/help` get fixed replies, `/movie <name>` searches for
//! `<name>`, and anything else is searched for verbatim.

use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// `/movie` sent without a name.
    MovieUsage,
    Search(String),
}

// `/name`, optional `@BotName` suffix (group chats), optional arguments.
static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^/([A-Za-z0-9_]+)(?:@[A-Za-z0-9_]+)?(?:\s+(.*))?$")
        .expect("static regex compile")
});

#[must_use]
pub fn parse_command(text: &str) -> Command {
    let text = text.trim();

    let Some(cap) = COMMAND_RE.captures(text) else {
        return Command::Search(text.to_string());
    };

    let args = cap.get(2).map_or("", |m| m.as_str().trim());

    match cap[1].to_ascii_lowercase().as_str() {
        "start" => Command::Start,
        "help" => Command::Help,
        "movie" if args.is_empty() => Command::MovieUsage,
        "movie" => Command::Search(args.to_string()),
        _ => Command::Search(text.to_string()),
    }
}
