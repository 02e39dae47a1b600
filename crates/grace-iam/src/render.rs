//! User-facing rendering of IAM lookup results.
//!
//! Pure string formatting — the session prints these verbatim after the
//! `Grace:` prefix.

use crate::types::{
    AccessKeyRecord, MfaDeviceRecord, PolicyRecord, UserAccessRecord, UserRecord,
};

pub fn render_users(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "I didn't find any IAM users in this account.".to_string();
    }
    let mut out = format!("I found {} IAM user(s):", users.len());
    for user in users {
        out.push_str(&format!("\n  - {} ({})", user.name, user.arn));
    }
    out
}

pub fn render_mfa_devices(user: &str, devices: &[MfaDeviceRecord]) -> String {
    if devices.is_empty() {
        return format!("{user} has no MFA devices assigned. You may want to flag that.");
    }
    let mut out = format!("{user} has {} MFA device(s):", devices.len());
    for device in devices {
        out.push_str(&format!("\n  - {}", device.serial_number));
    }
    out
}

pub fn render_access_keys(user: &str, keys: &[AccessKeyRecord]) -> String {
    if keys.is_empty() {
        return format!("{user} has no access keys.");
    }
    let mut out = format!("{user} has {} access key(s):", keys.len());
    for key in keys {
        out.push_str(&format!("\n  - {} [{}]", key.key_id, key.status));
    }
    out
}

pub fn render_user_access(user: &str, access: &UserAccessRecord) -> String {
    let mut out = format!("Access summary for {user}:");

    if access.groups.is_empty() {
        out.push_str("\n  Groups: none");
    } else {
        out.push_str(&format!("\n  Groups: {}", access.groups.join(", ")));
    }

    if access.attached_policies.is_empty() {
        out.push_str("\n  Attached policies: none");
    } else {
        out.push_str("\n  Attached policies:");
        for policy in &access.attached_policies {
            out.push_str(&format!("\n    - {} ({})", policy.name, policy.arn));
        }
    }

    if access.inline_policy_names.is_empty() {
        out.push_str("\n  Inline policies: none");
    } else {
        out.push_str(&format!(
            "\n  Inline policies: {}",
            access.inline_policy_names.join(", ")
        ));
    }

    out
}

pub fn render_policy(policy: &PolicyRecord) -> String {
    let mut out = format!("Policy {} ({})", policy.name, policy.arn);
    if let Some(description) = &policy.description {
        out.push_str(&format!("\n  {description}"));
    }
    match &policy.document {
        Some(document) => out.push_str(&format!("\n{document}")),
        None => out.push_str("\n  (no document available)"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttachedPolicyRecord;

    #[test]
    fn users_list_and_empty() {
        let users = vec![UserRecord {
            name: "alice".into(),
            arn: "arn:aws:iam::123456789012:user/alice".into(),
        }];
        let out = render_users(&users);
        assert!(out.contains("1 IAM user(s)"));
        assert!(out.contains("alice"));
        assert!(render_users(&[]).contains("didn't find any"));
    }

    #[test]
    fn mfa_empty_flags_the_gap() {
        let out = render_mfa_devices("bob", &[]);
        assert!(out.contains("bob has no MFA devices"));
    }

    #[test]
    fn access_keys_show_status() {
        let keys = vec![AccessKeyRecord {
            key_id: "AKIAEXAMPLE1".into(),
            status: "Inactive".into(),
        }];
        let out = render_access_keys("alice", &keys);
        assert!(out.contains("AKIAEXAMPLE1 [Inactive]"));
    }

    #[test]
    fn user_access_summary_covers_all_parts() {
        let access = UserAccessRecord {
            groups: vec!["developers".into()],
            attached_policies: vec![AttachedPolicyRecord {
                name: "ReadOnlyAccess".into(),
                arn: "arn:aws:iam::aws:policy/ReadOnlyAccess".into(),
            }],
            inline_policy_names: vec![],
        };
        let out = render_user_access("alice", &access);
        assert!(out.contains("Groups: developers"));
        assert!(out.contains("ReadOnlyAccess"));
        assert!(out.contains("Inline policies: none"));
    }

    #[test]
    fn policy_with_document() {
        let policy = PolicyRecord {
            name: "ReadOnlyAccess".into(),
            arn: "arn:aws:iam::aws:policy/ReadOnlyAccess".into(),
            description: Some("Read-only".into()),
            document: Some(r#"{"Version":"2012-10-17"}"#.into()),
        };
        let out = render_policy(&policy);
        assert!(out.contains("Read-only"));
        assert!(out.contains("2012-10-17"));
    }
}
