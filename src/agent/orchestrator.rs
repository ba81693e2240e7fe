//! Two-phase agent orchestration
//!
//! One query drives at most two model calls and at most one tool call, in
//! strict order: first prompt, optional tool dispatch, optional follow-up
//! prompt. Every path terminates; tool and model failures flow through as
//! ordinary answer text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::agent::directive::{clean_reply, parse_directive, DIRECT_ANSWER_PREFIX};
use crate::llm::provider::TextGenerator;
use crate::tools::{calculator, SearchProvider, ToolKind};

/// Final output of one orchestration pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswer {
    pub answer: String,
    pub tool_used: Option<ToolKind>,
}

/// Drives the two-phase protocol against injected collaborators
pub struct Orchestrator {
    generator: Arc<dyn TextGenerator>,
    search: SearchProvider,
}

impl Orchestrator {
    /// Create a new orchestrator with injected dependencies.
    pub fn new(generator: Arc<dyn TextGenerator>, search: SearchProvider) -> Self {
        Self { generator, search }
    }

    /// Run one query through the protocol. Infallible: failures along the way
    /// surface as answer text, never as an error.
    pub async fn handle_query(&self, query: &str) -> AgentAnswer {
        let request_id = Uuid::new_v4();

        let raw = self.generator.generate(&first_prompt(query)).await;
        let cleaned = clean_reply(&raw);
        debug!(%request_id, reply_len = cleaned.len(), "cleaned first reply");

        // Direct-answer check takes precedence; such a reply is never
        // scanned for a directive.
        if let Some(rest) = cleaned.strip_prefix(DIRECT_ANSWER_PREFIX) {
            info!(%request_id, tool = "none", "direct answer");
            return AgentAnswer {
                answer: rest.trim().to_string(),
                tool_used: None,
            };
        }

        if let Some(directive) = parse_directive(&cleaned) {
            info!(%request_id, tool = %directive.tool, "dispatching tool");

            let tool_result = match directive.tool {
                ToolKind::Calculator => calculator::evaluate(&directive.argument),
                ToolKind::Search => self.search.search(&directive.argument).await,
            };
            debug!(%request_id, result_len = tool_result.len(), "tool result");

            let answer = self
                .generator
                .generate(&follow_up_prompt(&tool_result, query))
                .await;

            return AgentAnswer {
                answer,
                tool_used: Some(directive.tool),
            };
        }

        info!(%request_id, tool = "none", "no directive, passing reply through");
        AgentAnswer {
            answer: cleaned,
            tool_used: None,
        }
    }
}

/// First-phase prompt: the query plus the three allowed response shapes.
fn first_prompt(query: &str) -> String {
    format!(
        r#"You are a precise AI assistant that MUST respond in ONE of these THREE formats ONLY.
DO NOT explain, just respond in one of these formats:

1. CallTool: calculator(2+2)
2. CallTool: search(exact search query)
3. Direct Answer: your answer

For your current question about "{query}", choose ONE format and respond EXACTLY like the examples.
If asking about current events, sports, news, or facts, you MUST use: CallTool: search(query)

Response:"#
    )
}

/// Second-phase prompt: the tool result plus the original query.
fn follow_up_prompt(tool_result: &str, query: &str) -> String {
    format!(
        "Based on this information: {tool_result}\n\n\
         Provide a single, clear answer to: {query}\n\
         - No explanations\n\
         - No technical details\n\
         - Just the answer"
    )
}
