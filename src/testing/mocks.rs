//! Mock implementations for testing
//!
//! Provides a scripted `TextGenerator` so the orchestration protocol can be
//! exercised without a live model endpoint.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::llm::provider::TextGenerator;

/// Mock text generator returning scripted replies and recording every prompt
#[derive(Debug, Default)]
pub struct MockTextGenerator {
    responses: Vec<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn single_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Every prompt received so far, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.prompts.lock().await.len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> String {
        let mut prompts = self.prompts.lock().await;
        let call_index = prompts.len();
        prompts.push(prompt.to_string());

        if self.responses.is_empty() {
            return "Mock response".to_string();
        }
        self.responses[call_index % self.responses.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_responses_in_order() {
        let generator = MockTextGenerator::new(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(generator.generate("a").await, "first");
        assert_eq!(generator.generate("b").await, "second");
        assert_eq!(generator.generate("c").await, "first");
        assert_eq!(generator.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_mock_records_prompts() {
        let generator = MockTextGenerator::single_response("ok");

        generator.generate("what is 2+2").await;

        let prompts = generator.prompts().await;
        assert_eq!(prompts, vec!["what is 2+2".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_mock_has_default_reply() {
        let generator = MockTextGenerator::new(vec![]);
        assert_eq!(generator.generate("x").await, "Mock response");
    }
}
