//! Intent and transcript role types.

use serde::{Deserialize, Serialize};

/// Closed set of intents Grace can act on.
///
/// Knowledge-base intents map to a section header via [`Intent::kb_header`];
/// IAM intents are answered by the cloud identity boundary. Input that
/// matches nothing is forwarded to the LLM (when enabled) or answered with a
/// clarification prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Password,
    Permissions,
    AudioVideo,
    HardwareSoftware,
    Wifi,
    IamListUsers,
    IamMfaDevices,
    IamAccessKeys,
    IamUserAccess,
    IamPolicy,
}

impl Intent {
    /// Section header for knowledge-base intents; None for IAM intents.
    ///
    /// Headers must match the knowledge-base line exactly, delimiters
    /// included.
    pub fn kb_header(self) -> Option<&'static str> {
        match self {
            Self::Password => Some("=== PASSWORD RESET INSTRUCTIONS ==="),
            Self::Permissions => Some("=== PERMISSIONS / ACCESS REQUEST INSTRUCTIONS ==="),
            Self::AudioVideo => Some("=== WEBCAM & MICROPHONE TROUBLESHOOTING ==="),
            Self::HardwareSoftware => Some("=== HARDWARE & SOFTWARE REQUEST INSTRUCTIONS ==="),
            Self::Wifi => Some("=== WIFI CONNECTION TROUBLESHOOTING ==="),
            Self::IamListUsers
            | Self::IamMfaDevices
            | Self::IamAccessKeys
            | Self::IamUserAccess
            | Self::IamPolicy => None,
        }
    }

    /// The IAM operation behind this intent; None for knowledge-base intents.
    pub fn iam_op(self) -> Option<IamOp> {
        match self {
            Self::IamListUsers => Some(IamOp::ListUsers),
            Self::IamMfaDevices => Some(IamOp::MfaDevices),
            Self::IamAccessKeys => Some(IamOp::AccessKeys),
            Self::IamUserAccess => Some(IamOp::UserAccess),
            Self::IamPolicy => Some(IamOp::Policy),
            _ => None,
        }
    }

    /// Whether answering this intent requires the IAM boundary.
    pub fn is_iam(self) -> bool {
        self.iam_op().is_some()
    }

    /// Stable name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Permissions => "permissions",
            Self::AudioVideo => "audio_video",
            Self::HardwareSoftware => "hardware_software",
            Self::Wifi => "wifi",
            Self::IamListUsers => "iam_list_users",
            Self::IamMfaDevices => "iam_mfa_devices",
            Self::IamAccessKeys => "iam_access_keys",
            Self::IamUserAccess => "iam_user_access",
            Self::IamPolicy => "iam_policy",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The read-only IAM operations Grace can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IamOp {
    ListUsers,
    MfaDevices,
    AccessKeys,
    UserAccess,
    Policy,
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Grace,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Grace => "grace",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
