use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use mydoc_groq::{ChatMessage, GroqClient, GroqError, DEFAULT_MODEL};

fn client_for(server: &MockServer) -> GroqClient {
    GroqClient::builder("test-key")
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn sends_model_and_messages_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body(json!({
                    "model": DEFAULT_MODEL,
                    "messages": [
                        {"role": "system", "content": "sys"},
                        {"role": "user", "content": "hi"},
                        {"role": "assistant", "content": "hello"},
                        {"role": "user", "content": "I have a headache"}
                    ]
                }));
            then.status(200).json_body(json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "created": 1,
                "model": DEFAULT_MODEL,
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Drink water."},
                    "finish_reason": "stop"
                }]
            }));
        })
        .await;

    let reply = client_for(&server)
        .complete(
            DEFAULT_MODEL,
            &[
                ChatMessage::system("sys"),
                ChatMessage::user("hi"),
                ChatMessage::assistant("hello"),
                ChatMessage::user("I have a headache"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(reply, "Drink water.");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401)
                .json_body(json!({"error": {"message": "Invalid API Key"}}));
        })
        .await;

    let err = client_for(&server)
        .complete(DEFAULT_MODEL, &[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    match err {
        GroqError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API Key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let err = client_for(&server)
        .complete(DEFAULT_MODEL, &[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::EmptyResponse));
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let err = client_for(&server)
        .complete(DEFAULT_MODEL, &[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::Json(_)));
}

#[tokio::test]
async fn unreachable_host_is_http_error_with_cause() {
    // Port 9 (discard) on localhost is not expected to accept connections.
    let client = GroqClient::builder("k")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client
        .complete(DEFAULT_MODEL, &[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::Http(_)));

    // The plain Display only names the URL; the refused connection is a nested cause.
    let detail = err.detail();
    assert!(detail.starts_with(&err.to_string()));
    assert!(detail.to_lowercase().contains("connect"), "root cause missing: {detail}");
}
