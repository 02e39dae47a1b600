//! AWS SDK implementation of the IAM lookup trait.

use async_trait::async_trait;
use aws_sdk_iam::Client;
use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::api::IamApi;
use crate::error::{IamError, IamResult};
use crate::types::{
    AccessKeyRecord, AttachedPolicyRecord, MfaDeviceRecord, PolicyRecord, UserAccessRecord,
    UserRecord,
};

/// IAM lookups over the real AWS service.
pub struct AwsIam {
    client: Client,
}

impl AwsIam {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the default-version document for a policy, if one is declared.
    async fn policy_document(&self, arn: &str, version_id: Option<&str>) -> IamResult<Option<String>> {
        let Some(version_id) = version_id else {
            return Ok(None);
        };
        let out = self
            .client
            .get_policy_version()
            .policy_arn(arn)
            .version_id(version_id)
            .send()
            .await
            .map_err(map_sdk_err)?;
        // Documents come back URL-encoded per the IAM API contract.
        Ok(out
            .policy_version()
            .and_then(|v| v.document())
            .map(percent_decode))
    }
}

#[async_trait]
impl IamApi for AwsIam {
    async fn list_users(&self) -> IamResult<Vec<UserRecord>> {
        let out = self.client.list_users().send().await.map_err(map_sdk_err)?;
        tracing::debug!(count = out.users().len(), "iam list_users");
        Ok(out
            .users()
            .iter()
            .map(|u| UserRecord {
                name: u.user_name().to_string(),
                arn: u.arn().to_string(),
            })
            .collect())
    }

    async fn list_mfa_devices(&self, user: &str) -> IamResult<Vec<MfaDeviceRecord>> {
        let out = self
            .client
            .list_mfa_devices()
            .user_name(user)
            .send()
            .await
            .map_err(map_sdk_err)?;
        Ok(out
            .mfa_devices()
            .iter()
            .map(|d| MfaDeviceRecord {
                serial_number: d.serial_number().to_string(),
            })
            .collect())
    }

    async fn list_access_keys(&self, user: &str) -> IamResult<Vec<AccessKeyRecord>> {
        let out = self
            .client
            .list_access_keys()
            .user_name(user)
            .send()
            .await
            .map_err(map_sdk_err)?;
        Ok(out
            .access_key_metadata()
            .iter()
            .map(|k| AccessKeyRecord {
                key_id: k.access_key_id().unwrap_or_default().to_string(),
                status: k
                    .status()
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect())
    }

    async fn user_access(&self, user: &str) -> IamResult<UserAccessRecord> {
        let groups = self
            .client
            .list_groups_for_user()
            .user_name(user)
            .send()
            .await
            .map_err(map_sdk_err)?;

        let attached = self
            .client
            .list_attached_user_policies()
            .user_name(user)
            .send()
            .await
            .map_err(map_sdk_err)?;

        let inline = self
            .client
            .list_user_policies()
            .user_name(user)
            .send()
            .await
            .map_err(map_sdk_err)?;

        Ok(UserAccessRecord {
            groups: groups
                .groups()
                .iter()
                .map(|g| g.group_name().to_string())
                .collect(),
            attached_policies: attached
                .attached_policies()
                .iter()
                .map(|p| AttachedPolicyRecord {
                    name: p.policy_name().unwrap_or_default().to_string(),
                    arn: p.policy_arn().unwrap_or_default().to_string(),
                })
                .collect(),
            inline_policy_names: inline.policy_names().to_vec(),
        })
    }

    async fn policy_by_arn(&self, arn: &str) -> IamResult<PolicyRecord> {
        let out = self
            .client
            .get_policy()
            .policy_arn(arn)
            .send()
            .await
            .map_err(map_sdk_err)?;

        let policy = out
            .policy()
            .ok_or_else(|| IamError::NoSuchEntity(format!("no policy found at {arn}")))?;

        let document = self
            .policy_document(arn, policy.default_version_id())
            .await?;

        Ok(PolicyRecord {
            name: policy.policy_name().unwrap_or_default().to_string(),
            arn: policy.arn().unwrap_or(arn).to_string(),
            description: policy.description().map(str::to_string),
            document,
        })
    }

    async fn policy_by_name(&self, name: &str) -> IamResult<PolicyRecord> {
        // Only the ARN addresses a policy directly; a bare name means a
        // linear scan over the first page of managed policies.
        let out = self
            .client
            .list_policies()
            .send()
            .await
            .map_err(map_sdk_err)?;

        let arn = out
            .policies()
            .iter()
            .find(|p| {
                p.policy_name()
                    .is_some_and(|n| n.eq_ignore_ascii_case(name))
            })
            .and_then(|p| p.arn())
            .ok_or_else(|| {
                IamError::NoSuchEntity(format!("no managed policy named '{name}' found"))
            })?
            .to_string();

        self.policy_by_arn(&arn).await
    }
}

/// Map an SDK error onto the boundary's tagged kinds by service error code.
fn map_sdk_err<E>(err: SdkError<E>) -> IamError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}", DisplayErrorContext(&err)));
    classify_service_error(err.code(), message)
}

fn classify_service_error(code: Option<&str>, message: String) -> IamError {
    match code {
        Some("NoSuchEntity") => IamError::NoSuchEntity(message),
        Some("AccessDenied") | Some("AccessDeniedException") => IamError::AccessDenied(message),
        _ => IamError::Api(message),
    }
}

/// Decode the percent-encoding IAM applies to policy documents.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2]))
        {
            out.push(hi * 16 + lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
