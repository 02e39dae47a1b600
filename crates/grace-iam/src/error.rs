//! IAM boundary error types.

use thiserror::Error;

/// Tagged failure kinds from the IAM boundary.
///
/// Call sites branch on the kind; the carried text is the service's own
/// message and is embedded verbatim in the user-facing reply.
#[derive(Debug, Clone, Error)]
pub enum IamError {
    #[error("{0}")]
    NoSuchEntity(String),

    #[error("{0}")]
    AccessDenied(String),

    #[error("{0}")]
    Api(String),
}

/// Convenience alias for IAM boundary results.
pub type IamResult<T> = Result<T, IamError>;
