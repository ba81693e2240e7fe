//! Hosted inference endpoint client
//!
//! Speaks the text-generation inference API convention: a POST of
//! `{"inputs": prompt}` with a bearer credential, answered either by a list
//! whose first element carries a `generated_text` field or by a bare JSON
//! value. Both shapes are normalized to plain text.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ModelConfig;
use crate::llm::provider::{LlmError, TextGenerator};

/// Client for a hosted text-generation endpoint
pub struct InferenceApiClient {
    config: ModelConfig,
    client: Client,
}

impl InferenceApiClient {
    /// Create a new inference client from configuration.
    pub fn new(config: ModelConfig) -> Result<Self, LlmError> {
        if config.api_token.is_empty() {
            return Err(LlmError::NotConfigured(
                "model API token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .header("Content-Type", "application/json")
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{status} - {error_text}")));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(extract_generated_text(&value))
    }
}

/// Normalize the two observed response shapes to plain text (pure function).
///
/// A non-empty list yields its first element's `generated_text` field, or the
/// stringified element when the field is absent. Anything else is returned as
/// the bare string it is, or stringified verbatim.
fn extract_generated_text(value: &Value) -> String {
    if let Some(first) = value.as_array().and_then(|items| items.first()) {
        if let Some(text) = first.get("generated_text").and_then(|t| t.as_str()) {
            return text.to_string();
        }
        return first.to_string();
    }

    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl TextGenerator for InferenceApiClient {
    async fn generate(&self, prompt: &str) -> String {
        match self.complete(prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error querying model: {e}"),
        }
    }
}
