//! Mock IAM backend for testing — fixtures plus scripted failures.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::api::IamApi;
use crate::error::{IamError, IamResult};
use crate::types::{
    AccessKeyRecord, AttachedPolicyRecord, MfaDeviceRecord, PolicyRecord, UserAccessRecord,
    UserRecord,
};

/// In-memory IAM fixture set.
///
/// Unknown users produce `IamError::NoSuchEntity` like the real service.
/// A scripted failure, when set, is returned from every call — for
/// exercising the session's error paths.
#[derive(Default)]
pub struct MockIam {
    users: Vec<UserRecord>,
    mfa: HashMap<String, Vec<MfaDeviceRecord>>,
    keys: HashMap<String, Vec<AccessKeyRecord>>,
    access: HashMap<String, UserAccessRecord>,
    policies: Vec<PolicyRecord>,
    failure: Option<IamError>,
}

impl MockIam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixtures covering two users, keys, MFA, groups, and one policy.
    pub fn with_sample_data() -> Self {
        let mut mock = Self::new();
        mock.users = vec![
            UserRecord {
                name: "alice".into(),
                arn: "arn:aws:iam::123456789012:user/alice".into(),
            },
            UserRecord {
                name: "bob".into(),
                arn: "arn:aws:iam::123456789012:user/bob".into(),
            },
        ];
        mock.mfa.insert(
            "alice".into(),
            vec![MfaDeviceRecord {
                serial_number: "arn:aws:iam::123456789012:mfa/alice".into(),
            }],
        );
        mock.mfa.insert("bob".into(), vec![]);
        mock.keys.insert(
            "alice".into(),
            vec![
                AccessKeyRecord {
                    key_id: "AKIAEXAMPLE1".into(),
                    status: "Active".into(),
                },
                AccessKeyRecord {
                    key_id: "AKIAEXAMPLE2".into(),
                    status: "Inactive".into(),
                },
            ],
        );
        mock.keys.insert("bob".into(), vec![]);
        mock.access.insert(
            "alice".into(),
            UserAccessRecord {
                groups: vec!["developers".into(), "oncall".into()],
                attached_policies: vec![AttachedPolicyRecord {
                    name: "ReadOnlyAccess".into(),
                    arn: "arn:aws:iam::aws:policy/ReadOnlyAccess".into(),
                }],
                inline_policy_names: vec!["alice-s3-scratch".into()],
            },
        );
        mock.access.insert("bob".into(), UserAccessRecord::default());
        mock.policies = vec![PolicyRecord {
            name: "ReadOnlyAccess".into(),
            arn: "arn:aws:iam::aws:policy/ReadOnlyAccess".into(),
            description: Some("Read-only access to all resources".into()),
            document: Some(r#"{"Version":"2012-10-17","Statement":[]}"#.into()),
        }];
        mock
    }

    /// Make every call fail with the given error.
    pub fn with_failure(mut self, error: IamError) -> Self {
        self.failure = Some(error);
        self
    }

    fn check_failure(&self) -> IamResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn known_user(&self, user: &str) -> IamResult<()> {
        if self.users.iter().any(|u| u.name == user) {
            Ok(())
        } else {
            Err(IamError::NoSuchEntity(format!(
                "The user with name {user} cannot be found."
            )))
        }
    }
}

#[async_trait]
impl IamApi for MockIam {
    async fn list_users(&self) -> IamResult<Vec<UserRecord>> {
        self.check_failure()?;
        Ok(self.users.clone())
    }

    async fn list_mfa_devices(&self, user: &str) -> IamResult<Vec<MfaDeviceRecord>> {
        self.check_failure()?;
        self.known_user(user)?;
        Ok(self.mfa.get(user).cloned().unwrap_or_default())
    }

    async fn list_access_keys(&self, user: &str) -> IamResult<Vec<AccessKeyRecord>> {
        self.check_failure()?;
        self.known_user(user)?;
        Ok(self.keys.get(user).cloned().unwrap_or_default())
    }

    async fn user_access(&self, user: &str) -> IamResult<UserAccessRecord> {
        self.check_failure()?;
        self.known_user(user)?;
        Ok(self.access.get(user).cloned().unwrap_or_default())
    }

    async fn policy_by_arn(&self, arn: &str) -> IamResult<PolicyRecord> {
        self.check_failure()?;
        self.policies
            .iter()
            .find(|p| p.arn == arn)
            .cloned()
            .ok_or_else(|| IamError::NoSuchEntity(format!("no policy found at {arn}")))
    }

    async fn policy_by_name(&self, name: &str) -> IamResult<PolicyRecord> {
        self.check_failure()?;
        self.policies
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                IamError::NoSuchEntity(format!("no managed policy named '{name}' found"))
            })
    }
}
