//! Knowledge-base error types.

use thiserror::Error;

/// Errors that can occur reading the knowledge base.
///
/// A missing file is its own kind: it is a deployment error the operator
/// should hear about, distinct from "topic not documented" (which is not an
/// error at all — lookups return `Ok(None)` for that).
#[derive(Debug, Error)]
pub enum KbError {
    #[error("knowledge base file missing: {0}")]
    FileMissing(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },
}

/// Convenience alias for knowledge-base results.
pub type KbResult<T> = Result<T, KbError>;
