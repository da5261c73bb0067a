use super::*;

#[test]
fn request_serializes_prompt_field() {
    let body = serde_json::to_value(CompletionRequest { prompt: "hi there" }).unwrap();
    assert_eq!(body, serde_json::json!({ "prompt": "hi there" }));
}

#[test]
fn reply_deserializes_bot_field() {
    let reply: CompletionReply = serde_json::from_value(serde_json::json!({ "bot": "  hello  " })).unwrap();
    assert_eq!(reply.bot, "  hello  ");
}

#[test]
fn reply_without_bot_field_is_an_error() {
    let parsed = serde_json::from_value::<CompletionReply>(serde_json::json!({ "text": "hello" }));
    assert!(parsed.is_err());
}

#[test]
fn status_detail_prefers_server_body() {
    let err = CompletionError::Status { status: 429, body: "rate limited".to_owned() };
    assert_eq!(err.detail(), "rate limited");
}

#[test]
fn status_detail_falls_back_to_error_text_for_blank_body() {
    let err = CompletionError::Status { status: 502, body: "  ".to_owned() };
    assert_eq!(err.detail(), "completion endpoint returned status 502:   ");
}

#[test]
fn request_error_detail_is_its_display() {
    let err = CompletionError::Request("connection refused".to_owned());
    assert_eq!(err.detail(), "completion request failed: connection refused");
}
