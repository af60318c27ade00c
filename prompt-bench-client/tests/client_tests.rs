use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prompt_bench_client::{BoundProvider, ClientConfig, LlmClient, Provider};
use prompt_bench_core::CompletionProvider;

fn gemini_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_gemini_api_key("test-key")
        .with_gemini_base_url(server.uri())
}

fn openrouter_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_openrouter_api_key("test-key")
        .with_openrouter_base_url(server.uri())
}

#[tokio::test]
async fn test_gemini_success_maps_text_and_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "The answer is 391." }] }
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 8,
                "totalTokenCount": 20
            }
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(gemini_config(&server)).unwrap();
    let response = client.complete("What is 23 x 17?", Provider::Gemini).await;

    assert!(response.success);
    assert_eq!(response.text, "The answer is 391.");
    assert_eq!(response.provider_label, "Gemini");
    assert_eq!(response.total_tokens(), 20);
}

#[tokio::test]
async fn test_openrouter_success_maps_text_and_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "openai/gpt-4o" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "391" }
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 2,
                "total_tokens": 12
            }
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(openrouter_config(&server)).unwrap();
    let response = client.complete("What is 23 x 17?", Provider::OpenRouter).await;

    assert!(response.success);
    assert_eq!(response.text, "391");
    assert_eq!(response.provider_label, "OpenRouter");
    assert_eq!(response.total_tokens(), 12);
}

#[tokio::test]
async fn test_http_error_becomes_failed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let client = LlmClient::new(openrouter_config(&server)).unwrap();
    let response = client.complete("hello", Provider::OpenRouter).await;

    assert!(!response.success);
    assert!(response.error_message.contains("429"));
    assert_eq!(response.total_tokens(), 0);
}

#[tokio::test]
async fn test_missing_api_key_becomes_failed_response() {
    let client = LlmClient::new(ClientConfig::default()).unwrap();
    let response = client.complete("hello", Provider::Gemini).await;

    assert!(!response.success);
    assert!(response.error_message.contains("not initialized"));
}

#[tokio::test]
async fn test_empty_candidate_list_becomes_failed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = LlmClient::new(gemini_config(&server)).unwrap();
    let response = client.complete("hello", Provider::Gemini).await;

    assert!(!response.success);
    assert!(response.error_message.contains("no completion text"));
}

#[tokio::test]
async fn test_missing_usage_defaults_to_zero_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "hi" }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(gemini_config(&server)).unwrap();
    let response = client.complete("hello", Provider::Gemini).await;

    assert!(response.success);
    assert_eq!(response.total_tokens(), 0);
}

#[tokio::test]
async fn test_available_providers_follow_configured_keys() {
    let client = LlmClient::new(ClientConfig::default().with_openrouter_api_key("k")).unwrap();
    assert_eq!(client.available_providers(), vec![Provider::OpenRouter]);
}

#[tokio::test]
async fn test_bound_provider_implements_completion_trait() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "ok" } }],
            "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
        })))
        .mount(&server)
        .await;

    let client = LlmClient::new(openrouter_config(&server)).unwrap();
    let bound = BoundProvider::new(client, Provider::OpenRouter);

    assert_eq!(bound.label(), "OpenRouter");
    let response = bound.complete("hello").await;
    assert!(response.success);
    assert_eq!(response.text, "ok");
}
