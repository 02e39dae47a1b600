//! Per-turn orchestration.
//!
//! `Session` owns everything a turn touches: the knowledge base, the
//! fallback rotation, the optional cloud boundaries, and the transcript.
//! There is no other state — the REPL in `main` just feeds lines in and
//! prints replies out.

use grace_core::{
    FallbackPool, IamOp, PolicyRef, Role, classify, is_exit_command, policy_argument,
    username_argument,
};
use grace_iam::{IamApi, render};
use grace_kb::{KbError, KbStore};
use grace_llm::ChatModel;

use crate::replies;
use crate::transcript::Transcript;

/// Outcome of one user turn.
pub struct Turn {
    pub reply: String,
    /// True when the session should end after this reply.
    pub farewell: bool,
}

pub struct Session {
    kb: KbStore,
    fallbacks: FallbackPool,
    iam: Option<Box<dyn IamApi>>,
    llm: Option<Box<dyn ChatModel>>,
    transcript: Transcript,
}

impl Session {
    pub fn new(kb: KbStore, transcript: Transcript) -> Self {
        Self {
            kb,
            fallbacks: FallbackPool::default(),
            iam: None,
            llm: None,
            transcript,
        }
    }

    pub fn with_iam(mut self, iam: Box<dyn IamApi>) -> Self {
        self.iam = Some(iam);
        self
    }

    pub fn with_llm(mut self, llm: Box<dyn ChatModel>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: FallbackPool) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Process one turn: classify, answer, log. Never fails — every error
    /// path degrades to a reply and the loop continues.
    pub async fn handle_turn(&mut self, input: &str) -> Turn {
        let input = input.trim();

        if is_exit_command(input) {
            let reply = replies::GOODBYE.to_string();
            self.log_turn(input, &reply);
            return Turn {
                reply,
                farewell: true,
            };
        }

        let intent = classify(input);
        tracing::debug!(
            intent = intent.map(|i| i.as_str()).unwrap_or("none"),
            "turn classified"
        );

        let reply = match intent {
            Some(intent) => match (intent.kb_header(), intent.iam_op()) {
                (Some(header), _) => self.kb_reply(header).await,
                (None, Some(op)) => self.iam_reply(op, input).await,
                (None, None) => replies::CLARIFY.to_string(),
            },
            None => self.llm_reply(input).await,
        };

        self.log_turn(input, &reply);
        Turn {
            reply,
            farewell: false,
        }
    }

    async fn kb_reply(&mut self, header: &str) -> String {
        match self.kb.section(header).await {
            Ok(Some(text)) => text,
            // Topic not documented: scripted apology, rotated per turn.
            Ok(None) => self.fallbacks.next_message(),
            // Deployment problem: distinct fixed message.
            Err(KbError::FileMissing(path)) => replies::kb_missing(&path),
            Err(err) => replies::lookup_error(&err.to_string()),
        }
    }

    async fn iam_reply(&self, op: IamOp, input: &str) -> String {
        let Some(iam) = self.iam.as_deref() else {
            return replies::IAM_OFFLINE.to_string();
        };

        let result = match op {
            IamOp::ListUsers => iam.list_users().await.map(|users| render::render_users(&users)),
            IamOp::MfaDevices => {
                let Some(user) = username_argument(input) else {
                    return replies::ASK_WHO.to_string();
                };
                iam.list_mfa_devices(user)
                    .await
                    .map(|devices| render::render_mfa_devices(user, &devices))
            }
            IamOp::AccessKeys => {
                let Some(user) = username_argument(input) else {
                    return replies::ASK_WHO.to_string();
                };
                iam.list_access_keys(user)
                    .await
                    .map(|keys| render::render_access_keys(user, &keys))
            }
            IamOp::UserAccess => {
                let Some(user) = username_argument(input) else {
                    return replies::ASK_WHO.to_string();
                };
                iam.user_access(user)
                    .await
                    .map(|access| render::render_user_access(user, &access))
            }
            IamOp::Policy => match policy_argument(input) {
                Some(PolicyRef::Arn(arn)) => {
                    iam.policy_by_arn(arn).await.map(|p| render::render_policy(&p))
                }
                Some(PolicyRef::Name(name)) => {
                    iam.policy_by_name(name).await.map(|p| render::render_policy(&p))
                }
                None => return replies::ASK_WHICH_POLICY.to_string(),
            },
        };

        result.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "iam lookup failed");
            replies::lookup_error(&err.to_string())
        })
    }

    async fn llm_reply(&self, input: &str) -> String {
        if input.is_empty() {
            return replies::CLARIFY.to_string();
        }
        match self.llm.as_deref() {
            Some(model) => match model.complete(input).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(backend = model.backend_name(), error = %err, "completion failed");
                    replies::lookup_error(&err.to_string())
                }
            },
            None => replies::CLARIFY.to_string(),
        }
    }

    fn log_turn(&self, input: &str, reply: &str) {
        self.transcript.append(Role::User, input);
        self.transcript.append(Role::Grace, reply);
    }
}
