//! Library half of the `grace` binary: configuration, the chat transcript,
//! canned reply text, and the per-turn session orchestration. The binary
//! itself only wires these together around a stdin/stdout loop.

pub mod config;
pub mod replies;
pub mod session;
pub mod startup;
pub mod transcript;

pub use config::GraceConfig;
pub use session::{Session, Turn};
pub use transcript::Transcript;
