//! # Gemini Provider Wire Tests
//!
//! Runs `GeminiProvider` against a `wiremock` server to pin down the request
//! body, the API key query parameter, and how HTTP outcomes map onto
//! `ModelResponse` and `ExtractError`.

use anyhow::Result;
use appraisal::{
    providers::ai::{gemini::GeminiProvider, retry::RetryPolicy, AiProvider},
    Document, ExtractError, ModelResponse,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(format!("{}{MODEL_PATH}", server.uri()), "test-key".to_string())
        .expect("provider should build")
}

fn document() -> Document {
    Document::pdf(b"%PDF".to_vec())
}

#[tokio::test]
async fn test_sends_inline_pdf_and_prompt() -> Result<()> {
    // --- 1. Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"inlineData": {"mimeType": "application/pdf", "data": "JVBERg=="}},
                    {"text": "Fields for SITE: [\"Area\"]."}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{\"Area\": \"0.2 ac\"}\n```"}], "role": "model"},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // --- 2. Act ---
    let response = provider(&server)
        .generate_with_document(&document(), "Fields for SITE: [\"Area\"].")
        .await?;

    // --- 3. Assert ---
    assert_eq!(
        response,
        ModelResponse::Text("```json\n{\"Area\": \"0.2 ac\"}\n```".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_prompt_feedback_block() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let response = provider(&server)
        .generate_with_document(&document(), "prompt")
        .await?;
    assert_eq!(
        response,
        ModelResponse::Blocked {
            reason: "SAFETY".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_quota_exhaustion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Even with retries enabled, quota errors are returned straight away.
    let provider = provider(&server).with_retry(RetryPolicy {
        max_retries: 3,
        base_delay_ms: 1,
        max_delay_ms: 1,
    });
    let err = provider
        .generate_with_document(&document(), "prompt")
        .await
        .unwrap_err();
    match err {
        ExtractError::QuotaExhausted(body) => assert!(body.contains("RESOURCE_EXHAUSTED")),
        other => panic!("expected QuotaExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .generate_with_document(&document(), "prompt")
        .await
        .unwrap_err();
    match err {
        ExtractError::AiApi { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected AiApi, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_errors_are_retried() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "{}"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider(&server).with_retry(RetryPolicy {
        max_retries: 2,
        base_delay_ms: 1,
        max_delay_ms: 5,
    });
    let response = provider
        .generate_with_document(&document(), "prompt")
        .await?;
    assert_eq!(response, ModelResponse::Text("{}".to_string()));
    Ok(())
}

#[test]
fn test_missing_api_key() {
    let result = GeminiProvider::new("http://localhost".to_string(), "  ".to_string());
    assert!(matches!(result, Err(ExtractError::MissingApiKey)));
}
