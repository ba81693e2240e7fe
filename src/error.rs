//! Crate-level error types
//!
//! Tool and model failures are deliberately NOT represented here: those
//! boundaries return descriptive `"Error: ..."` text as ordinary data, so a
//! failed search or model call still produces a well-formed answer. This
//! module covers the faults that can actually abort the process: bad
//! configuration, client construction, and adapter I/O.

use thiserror::Error;

/// Main error type for falconet startup and adapter operations
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Model client error: {0}")]
    Llm(#[from] crate::llm::provider::LlmError),

    #[error("Search client error: {0}")]
    Search(#[from] crate::tools::web_search::SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for falconet operations
pub type AgentResult<T> = Result<T, AgentError>;
