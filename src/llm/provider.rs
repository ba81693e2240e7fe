//! Text-generation provider abstraction
//!
//! The orchestrator only ever sees a prompt-in/text-out seam. Failures are
//! folded into the returned text (`"Error querying model: ..."`) so the
//! orchestrator can treat a failed call as ordinary model output and still
//! produce a well-formed answer.

use async_trait::async_trait;
use thiserror::Error;

/// Prompt-in/text-out seam for the orchestrator, object-safe for injection
/// and testing.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` to the model and return the generated text.
    ///
    /// Never fails: transport and parsing errors come back as
    /// `"Error querying model: <message>"` text.
    async fn generate(&self, prompt: &str) -> String;
}

/// Model client errors (internal; folded to text at the trait boundary)
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let errors = vec![
            LlmError::NotConfigured("token missing".to_string()),
            LlmError::Network("connection refused".to_string()),
            LlmError::Api("503 Service Unavailable".to_string()),
            LlmError::InvalidResponse("not json".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
