//! Mock chat backend for testing — scripted replies and failures.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ChatModel;
use crate::error::{LlmError, LlmResult};

/// Serves scripted replies in order; repeats the last one when exhausted.
/// A scripted failure, when set, is returned from every call.
pub struct MockChatModel {
    replies: Mutex<Vec<String>>,
    failure: Option<LlmError>,
}

impl MockChatModel {
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        replies.reverse(); // pop() serves front-to-back
        Self {
            replies: Mutex::new(replies),
            failure: None,
        }
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, _user_text: &str) -> LlmResult<String> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        match replies.len() {
            0 => Err(LlmError::EmptyResponse),
            1 => Ok(replies[0].clone()),
            _ => Ok(replies.pop().unwrap_or_default()),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
