//! The two built-in tools the model can ask for
//!
//! The tool set is closed: arithmetic evaluation and web search. Both return
//! their failures as descriptive text, never as errors, so the orchestrator
//! can hand any tool output straight back to the model.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod web_search;

pub use web_search::SearchProvider;

/// Built-in tool identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Calculator,
    Search,
}

impl ToolKind {
    /// Wire name as it appears inside a `CallTool:` directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Calculator => "calculator",
            ToolKind::Search => "search",
        }
    }

    /// Resolve a directive token to a tool.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "calculator" => Some(ToolKind::Calculator),
            "search" => Some(ToolKind::Search),
            _ => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
