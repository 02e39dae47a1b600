//! Typed records returned by the IAM boundary.
//!
//! Thin projections of the service responses — only the fields the rendered
//! replies use.

use serde::{Deserialize, Serialize};

/// An IAM user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub arn: String,
}

/// An MFA device assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfaDeviceRecord {
    pub serial_number: String,
}

/// An access key belonging to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeyRecord {
    pub key_id: String,
    /// "Active" or "Inactive", as reported by the service.
    pub status: String,
}

/// A managed policy attached to a user or one of their groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedPolicyRecord {
    pub name: String,
    pub arn: String,
}

/// A user's group memberships plus the policies granting their access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserAccessRecord {
    pub groups: Vec<String>,
    pub attached_policies: Vec<AttachedPolicyRecord>,
    pub inline_policy_names: Vec<String>,
}

/// A managed policy, optionally with its default version document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub name: String,
    pub arn: String,
    pub description: Option<String>,
    /// Default-version policy document (JSON text), when available.
    pub document: Option<String>,
}
