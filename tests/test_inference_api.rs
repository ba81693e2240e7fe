//! Integration tests for the hosted inference endpoint client
//!
//! Tests behavioral contracts without testing implementation details:
//! - request shape (bearer credential, `inputs` body)
//! - normalization of both observed response shapes
//! - failures folded into `"Error querying model: ..."` text

use std::time::Duration;

use falconet::config::ModelConfig;
use falconet::llm::inference_api::InferenceApiClient;
use falconet::llm::provider::TextGenerator;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> InferenceApiClient {
    InferenceApiClient::new(ModelConfig {
        endpoint: format!("{base_url}/generate"),
        api_token: "test-token".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

#[tokio::test]
async fn test_generated_text_is_extracted_from_list_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({ "inputs": "Hello" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "Hello! How can I help?" }])),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert_eq!(reply, "Hello! How can I help?");
}

#[tokio::test]
async fn test_bare_string_response_is_returned_unquoted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("just text")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert_eq!(reply, "just text");
}

#[tokio::test]
async fn test_list_without_generated_text_is_stringified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "score": 0.5 }])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert_eq!(reply, r#"{"score":0.5}"#);
}

#[tokio::test]
async fn test_object_response_is_stringified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "Model is currently loading" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert_eq!(reply, r#"{"error":"Model is currently loading"}"#);
}

#[tokio::test]
async fn test_http_error_becomes_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert!(reply.starts_with("Error querying model: "));
    assert!(reply.contains("503"));
}

#[tokio::test]
async fn test_invalid_json_becomes_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let reply = client.generate("Hello").await;

    assert!(reply.starts_with("Error querying model: "));
}

#[tokio::test]
async fn test_unreachable_endpoint_becomes_error_text() {
    let client = test_client("http://127.0.0.1:9");
    let reply = client.generate("Hello").await;

    assert!(reply.starts_with("Error querying model: "));
}
