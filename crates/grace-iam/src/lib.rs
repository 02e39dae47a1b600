//! Read-only AWS IAM boundary for Grace.
//!
//! Account/permission lookups: users, MFA devices, access keys, group
//! memberships with attached and inline policies, and policy documents by
//! ARN or name. One outbound request per question, first page only, no
//! retries and no caching — failures surface as tagged [`IamError`] kinds
//! the session renders into a reply.

pub mod api;
pub mod aws;
pub mod error;
pub mod mock;
pub mod render;
pub mod types;

pub use api::IamApi;
pub use aws::AwsIam;
pub use error::{IamError, IamResult};
pub use mock::MockIam;
pub use types::{
    AccessKeyRecord, AttachedPolicyRecord, MfaDeviceRecord, PolicyRecord, UserAccessRecord,
    UserRecord,
};
