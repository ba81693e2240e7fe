//! Agent core: directive detection and the two-phase orchestration protocol

pub mod directive;
pub mod orchestrator;

pub use directive::{clean_reply, parse_directive, Directive};
pub use orchestrator::{AgentAnswer, Orchestrator};
