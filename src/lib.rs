//! Falconet - a minimal tool-using conversational agent
//!
//! Falconet forwards a user query to a hosted text-generation model, inspects
//! the reply for an embedded tool directive (a calculator expression or a web
//! search query), optionally executes that tool, and feeds the tool output
//! back to the model for a final answer.
//!
//! # Overview
//!
//! This crate provides:
//! - A directive parser recognizing `CallTool: name(argument)` in free-form model text
//! - A two-phase agent orchestrator (initial prompt, optional tool call, follow-up prompt)
//! - A safe arithmetic evaluator and a JSON web-search client as the two built-in tools
//! - An HTTP adapter (warp) and an interactive REPL adapter
//!
//! # Quick Start
//!
//! ```rust
//! use falconet::agent::directive::parse_directive;
//! use falconet::tools::ToolKind;
//!
//! let directive = parse_directive("CallTool: calculator(25*48)").unwrap();
//! assert_eq!(directive.tool, ToolKind::Calculator);
//! assert_eq!(directive.argument, "25*48");
//!
//! // Free-form replies with no directive yield no dispatch.
//! assert!(parse_directive("The capital of France is Paris.").is_none());
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod repl;
pub mod server;
pub mod testing;
pub mod tools;

pub use agent::orchestrator::{AgentAnswer, Orchestrator};
pub use config::{AgentConfig, ModelConfig, SearchConfig};
pub use error::{AgentError, AgentResult};
pub use llm::{InferenceApiClient, TextGenerator};
pub use tools::{SearchProvider, ToolKind};
