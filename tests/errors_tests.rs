use moviebot::errors::BotError;
use std::error::Error;

#[test]
fn test_bot_error_implements_error_trait() {
    // Verify BotError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = BotError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    let error = BotError::FetchError("connection refused".to_string());
    assert_eq!(format!("{error}"), "Failed to fetch feed: connection refused");

    let error = BotError::ParseError("missing channel".to_string());
    assert_eq!(format!("{error}"), "Failed to parse feed: missing channel");

    let error = BotError::DeliveryError("chat not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to deliver Telegram message: chat not found"
    );

    let error = BotError::MalformedUpdate("update has no message".to_string());
    assert_eq!(
        format!("{error}"),
        "Malformed Telegram update: update has no message"
    );
}

#[test]
fn test_bot_error_from_conversions() {
    // A relative URL cannot be parsed without a base
    let url_err = url::Url::parse("/feeds/posts/default").unwrap_err();
    match BotError::from(url_err) {
        BotError::FetchError(msg) => assert!(msg.contains("invalid feed URL")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let rss_err = rss::Channel::read_from(&b"not xml"[..]).unwrap_err();
    assert!(matches!(BotError::from(rss_err), BotError::ParseError(_)));

    // reqwest::Error has no public constructor; check the conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
