//! The IAM lookup trait.

use async_trait::async_trait;

use crate::error::IamResult;
use crate::types::{
    AccessKeyRecord, MfaDeviceRecord, PolicyRecord, UserAccessRecord, UserRecord,
};

/// Read-only IAM queries Grace can answer.
///
/// Implemented over the AWS SDK for production and by [`crate::MockIam`]
/// for tests. Every method is a single unbatched call: first page only,
/// no retry, no caching.
#[async_trait]
pub trait IamApi: Send + Sync {
    /// All IAM users in the account (first page).
    async fn list_users(&self) -> IamResult<Vec<UserRecord>>;

    /// MFA devices assigned to `user`.
    async fn list_mfa_devices(&self, user: &str) -> IamResult<Vec<MfaDeviceRecord>>;

    /// Access keys belonging to `user`.
    async fn list_access_keys(&self, user: &str) -> IamResult<Vec<AccessKeyRecord>>;

    /// Group memberships and attached/inline policies for `user`.
    async fn user_access(&self, user: &str) -> IamResult<UserAccessRecord>;

    /// A managed policy by exact ARN, with its default version document.
    async fn policy_by_arn(&self, arn: &str) -> IamResult<PolicyRecord>;

    /// A managed policy by name: linear scan over the first page of managed
    /// policies, case-insensitive name match.
    async fn policy_by_name(&self, name: &str) -> IamResult<PolicyRecord>;
}
