//! AWS Bedrock Converse implementation of the chat boundary.

use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ConverseOutput, Message, SystemContentBlock,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use crate::ChatModel;
use crate::error::{LlmError, LlmResult};

/// Persona preamble sent as system content with every request.
const PERSONA_PROMPT: &str = "\
You are Grace, a friendly IT Support Assistant for an internal helpdesk. \
You help with password resets, Wi-Fi problems, account permissions, webcam \
and microphone issues, and hardware or software requests. Keep answers \
short, practical, and step-by-step. If a question is outside IT support, \
say so politely and suggest contacting the helpdesk.";

/// Configuration for the Bedrock completion backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Bedrock model ID.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model_id() -> String {
    "us.amazon.nova-lite-v1:0".into()
}
fn default_timeout_secs() -> u64 {
    15
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Bedrock Converse chat backend.
pub struct BedrockChat {
    client: BedrockClient,
    config: LlmConfig,
    /// Optional knowledge-base text prepended to the system content so the
    /// model can ground answers in the documented procedures.
    context: Option<String>,
}

impl BedrockChat {
    pub fn new(client: BedrockClient, config: LlmConfig) -> Self {
        Self {
            client,
            config,
            context: None,
        }
    }

    /// Attach knowledge-base contents as grounding context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    fn system_content(&self) -> String {
        match &self.context {
            Some(context) => {
                format!("{PERSONA_PROMPT}\n\nInternal documentation:\n{context}")
            }
            None => PERSONA_PROMPT.to_string(),
        }
    }

    async fn call_converse(&self, user_text: &str) -> LlmResult<String> {
        let user_message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_text.to_string()))
            .build()
            .map_err(|e| LlmError::Api(format!("failed to build message: {e}")))?;

        let response = self
            .client
            .converse()
            .model_id(&self.config.model_id)
            .system(SystemContentBlock::Text(self.system_content()))
            .messages(user_message)
            .send()
            .await
            .map_err(|e| LlmError::Api(e.to_string()))?;

        let output = response.output().ok_or(LlmError::EmptyResponse)?;

        let text = match output {
            ConverseOutput::Message(msg) => msg.content().iter().find_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.clone())
                } else {
                    None
                }
            }),
            _ => None,
        };

        text.filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl ChatModel for BedrockChat {
    async fn complete(&self, user_text: &str) -> LlmResult<String> {
        let deadline = Duration::from_secs(self.config.timeout_secs);
        match timeout(deadline, self.call_converse(user_text)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "bedrock completion timed out"
                );
                Err(LlmError::Timeout(self.config.timeout_secs))
            }
        }
    }

    fn backend_name(&self) -> &str {
        "bedrock"
    }
}
