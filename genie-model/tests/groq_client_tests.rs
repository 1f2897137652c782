//! Integration tests for the Groq client against a scripted HTTP endpoint.

use genie_core::{CompletionModel, GenieError};
use genie_model::groq::{GroqClient, GroqConfig};
use genie_model::instruction::SYSTEM_INSTRUCTION;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GroqClient {
    GroqClient::new(GroqConfig::new("gsk_test").with_base_url(server.uri())).unwrap()
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1727000000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 320, "completion_tokens": 12, "total_tokens": 332}
    })
}

#[tokio::test]
async fn sends_fixed_generation_contract() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.3,
            "max_tokens": 8000,
            "messages": [
                {"role": "system", "content": SYSTEM_INSTRUCTION},
                {"role": "user", "content": "a todo app"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).complete("a todo app").await.unwrap();
    assert_eq!(reply.first_content(), Some("[]"));
    assert_eq!(reply.usage.unwrap().total_tokens, 332);
}

#[tokio::test]
async fn rate_limit_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_string(r#"{"error": {"message": "Rate limit reached"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).complete("a todo app").await.unwrap_err();
    match err {
        GenieError::RateLimited(detail) => assert!(detail.contains("Rate limit reached")),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_means_provider_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).complete("a todo app").await.unwrap_err();
    match err {
        GenieError::ProviderUnavailable(detail) => assert!(detail.contains("upstream exploded")),
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn other_statuses_keep_status_text_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error": {"message": "invalid model"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).complete("a todo app").await.unwrap_err();
    match err {
        GenieError::Provider { status, detail } => {
            assert_eq!(status, "400 Bad Request");
            assert!(detail.contains("invalid model"));
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn reply_without_message_text_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-test",
            "model": "llama-3.3-70b-versatile",
            "choices": [{"index": 0, "finish_reason": "length"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).complete("a todo app").await.unwrap();
    assert_eq!(reply.first_content(), None);
}
