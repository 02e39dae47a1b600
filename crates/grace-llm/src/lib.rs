//! Hosted-LLM completion boundary for Grace.
//!
//! One synchronous request per turn: persona preamble plus the raw user
//! text (optionally preceded by the full knowledge base as context), one
//! response rendered verbatim. No retries, no streaming, no conversation
//! memory on our side.

pub mod bedrock;
pub mod error;
pub mod mock;

use async_trait::async_trait;

/// Trait for chat completion backends.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Complete one user turn and return the reply text.
    async fn complete(&self, user_text: &str) -> LlmResult<String>;

    /// Backend name (for logging).
    fn backend_name(&self) -> &str;
}

pub use bedrock::{BedrockChat, LlmConfig};
pub use error::{LlmError, LlmResult};
pub use mock::MockChatModel;
