//! Shared types and pure turn logic for Grace.
//!
//! Everything in this crate is side-effect free: the intent rule table,
//! the classifier, exit detection, username argument extraction, and the
//! round-robin fallback message pool. Boundary crates (knowledge base,
//! IAM, LLM) build on these types but never the other way around.

pub mod args;
pub mod fallback;
pub mod intent;
pub mod rules;

pub use args::{PolicyRef, policy_argument, username_argument};
pub use fallback::FallbackPool;
pub use intent::{IamOp, Intent, Role};
pub use rules::{classify, is_exit_command};
