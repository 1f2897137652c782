//! End-to-end pipeline tests: a real client against a scripted endpoint.

use genie_core::{GenieError, flatten};
use genie_generator::ProjectGenerator;
use genie_model::groq::{GroqClient, GroqConfig};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeline_for(server: &MockServer) -> ProjectGenerator {
    let client =
        GroqClient::new(GroqConfig::new("gsk_test").with_base_url(server.uri())).unwrap();
    ProjectGenerator::new(Arc::new(client))
}

fn reply_with_content(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-test",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

#[tokio::test]
async fn generates_and_flattens_a_project() {
    let server = MockServer::start().await;
    let tree_json = json!([
        {"type": "folder", "name": "src", "children": [
            {"type": "file", "name": "main.rs", "content": "fn main() {}", "language": "rust"}
        ]},
        {"type": "file", "name": "README.md", "content": "# demo", "language": "markdown"}
    ]);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(reply_with_content(&tree_json.to_string()))
        .expect(1)
        .mount(&server)
        .await;

    let tree = pipeline_for(&server).generate("a demo project").await.unwrap();
    let files = flatten(&tree);
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["src/main.rs", "README.md"]);
}

#[tokio::test]
async fn provider_rate_limit_reaches_the_caller() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
        .expect(1)
        .mount(&server)
        .await;

    let err = pipeline_for(&server).generate("a demo project").await.unwrap_err();
    assert!(matches!(err, GenieError::RateLimited(_)));
}

#[tokio::test]
async fn prose_wrapped_reply_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(reply_with_content("Here you go:\n```json\n[]\n```"))
        .expect(1)
        .mount(&server)
        .await;

    let err = pipeline_for(&server).generate("a demo project").await.unwrap_err();
    assert!(matches!(err, GenieError::MalformedJson(_)));
}
