//! Error types for the agent crate.

use thiserror::Error;

/// Errors raised by the LLM execution layer.
///
/// The `Upstream` variant carries a provider or network failure verbatim:
/// the orchestrator records `to_string()` of whatever error reaches it, so
/// upstream messages must survive unchanged.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Raw provider or network failure, message preserved verbatim.
    #[error("{0}")]
    Upstream(String),

    /// Model invocation failed before a response was produced.
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// The provider returned a response we could not parse.
    #[error("failed to parse response: {0}")]
    ResponseParse(String),

    /// Binding or provider configuration problem.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for execution-layer operations.
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;
