//! LLM boundary error types.

use thiserror::Error;

/// Tagged failure kinds from the completion boundary.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("{0}")]
    Api(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Convenience alias for completion results.
pub type LlmResult<T> = Result<T, LlmError>;
