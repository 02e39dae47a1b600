//! E2E tests for the IAM turn paths: lookups, argument prompts, and the
//! error taxonomy.

mod helpers;

use helpers::TestHarness;

use grace_iam::{IamError, MockIam};

/// "list users" renders every fixture user.
#[tokio::test]
async fn e2e_list_users() {
    let mut h = TestHarness::with_iam("list_users", MockIam::with_sample_data());
    let turn = h.session.handle_turn("list users").await;
    assert!(turn.reply.contains("2 IAM user(s)"));
    assert!(turn.reply.contains("alice"));
    assert!(turn.reply.contains("bob"));
}

/// MFA lookup for a user with a device, and for one without.
#[tokio::test]
async fn e2e_mfa_devices() {
    let mut h = TestHarness::with_iam("mfa", MockIam::with_sample_data());

    let turn = h.session.handle_turn("show mfa devices for alice").await;
    assert!(turn.reply.contains("alice has 1 MFA device(s)"));

    let turn = h.session.handle_turn("does bob have mfa set up, check for bob").await;
    assert!(turn.reply.contains("bob has no MFA devices"));
}

/// Access keys include their status.
#[tokio::test]
async fn e2e_access_keys() {
    let mut h = TestHarness::with_iam("keys", MockIam::with_sample_data());
    let turn = h.session.handle_turn("list access keys for alice").await;
    assert!(turn.reply.contains("AKIAEXAMPLE1 [Active]"));
    assert!(turn.reply.contains("AKIAEXAMPLE2 [Inactive]"));
}

/// Group membership and policy summary.
#[tokio::test]
async fn e2e_user_access_summary() {
    let mut h = TestHarness::with_iam("access", MockIam::with_sample_data());
    let turn = h.session.handle_turn("what access does she have, groups for alice").await;
    assert!(turn.reply.contains("Groups: developers, oncall"));
    assert!(turn.reply.contains("ReadOnlyAccess"));
    assert!(turn.reply.contains("alice-s3-scratch"));
}

/// Policy fetch by name and by ARN both resolve to the same record.
#[tokio::test]
async fn e2e_policy_by_name_and_arn() {
    let mut h = TestHarness::with_iam("policy", MockIam::with_sample_data());

    let by_name = h.session.handle_turn("show the ReadOnlyAccess policy").await;
    assert!(by_name.reply.contains("arn:aws:iam::aws:policy/ReadOnlyAccess"));
    assert!(by_name.reply.contains("2012-10-17"));

    let by_arn = h
        .session
        .handle_turn("fetch policy arn:aws:iam::aws:policy/ReadOnlyAccess")
        .await;
    assert!(by_arn.reply.contains("Read-only access to all resources"));
}

/// A missing username yields a prompting reply, and no call is made —
/// a failing backend proves the short-circuit.
#[tokio::test]
async fn e2e_missing_username_prompts_without_calling() {
    let iam = MockIam::with_sample_data()
        .with_failure(IamError::Api("backend should not be reached".into()));
    let mut h = TestHarness::with_iam("no_user", iam);
    let turn = h.session.handle_turn("show mfa devices").await;
    assert!(turn.reply.contains("Who is this for?"));
}

/// Unknown users surface the service's NoSuchEntity message verbatim.
#[tokio::test]
async fn e2e_unknown_user_error_text() {
    let mut h = TestHarness::with_iam("unknown_user", MockIam::with_sample_data());
    let turn = h.session.handle_turn("list access keys for mallory").await;
    assert!(turn.reply.contains("I ran into an error"));
    assert!(turn.reply.contains("The user with name mallory cannot be found."));
}

/// Access-denied failures are non-fatal: the error text is embedded and the
/// next turn still works.
#[tokio::test]
async fn e2e_access_denied_then_recovery() {
    let iam = MockIam::with_sample_data()
        .with_failure(IamError::AccessDenied("not authorized to perform iam:ListUsers".into()));
    let mut h = TestHarness::with_iam("denied", iam);

    let turn = h.session.handle_turn("list users").await;
    assert!(turn.reply.contains("not authorized to perform iam:ListUsers"));
    assert!(!turn.farewell);

    // KB turns are unaffected by the broken boundary.
    let turn = h.session.handle_turn("my wifi is down").await;
    assert_eq!(turn.reply, "Restart your router.");
}

/// Without the IAM boundary wired, IAM turns get the offline reply.
#[tokio::test]
async fn e2e_iam_offline() {
    let mut h = TestHarness::kb_only("offline");
    let turn = h.session.handle_turn("list access keys for alice").await;
    assert!(turn.reply.contains("not connected to the identity service"));
}

/// An ambiguous policy mention without a name prompts for one.
#[tokio::test]
async fn e2e_policy_without_name_prompts() {
    let mut h = TestHarness::with_iam("which_policy", MockIam::with_sample_data());
    let turn = h.session.handle_turn("show the policy").await;
    assert!(turn.reply.contains("Which policy"));
}
