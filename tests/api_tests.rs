//! API client tests against a mocked HTTP server

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use promptly_cli::{compose, ApiClient, PromptRequest, PromptSource};

#[tokio::test]
async fn openai_request_extracts_the_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "Direction text" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new("openai", &server.uri(), "test-key", "gpt-3.5-turbo");
    let response = client.send_message("hello").await.unwrap();
    assert_eq!(response, "Direction text");
}

#[tokio::test]
async fn ollama_request_reads_the_response_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "local model text" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new("ollama", &server.uri(), "", "llama3");
    let response = client.send_message("hello").await.unwrap();
    assert_eq!(response, "local model text");
}

#[tokio::test]
async fn server_error_surfaces_as_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = ApiClient::new("openai", &server.uri(), "test-key", "gpt-3.5-turbo");
    assert!(client.send_message("hello").await.is_err());
}

#[tokio::test]
async fn failing_provider_degrades_compose_to_the_offline_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = ApiClient::new("openai", &server.uri(), "test-key", "gpt-3.5-turbo");
    let request = PromptRequest::new("summarize the quarterly report");

    let offline = compose(&request, None).await.unwrap();
    let degraded = compose(&request, Some(&client)).await.unwrap();

    assert_eq!(degraded.prompt.final_prompt, offline.prompt.final_prompt);
    assert_matches!(degraded.source, PromptSource::Degraded(_));
}
