//! Keyword rule table and the intent classifier.
//!
//! Classification is a fixed-priority scan over substring rules: the first
//! rule whose triggers occur in the lowercased input wins. Overlap between
//! rules is resolved by table position, not by match specificity, so the
//! IAM rules sit above the generic helpdesk rules.

use crate::intent::Intent;

/// One classifier rule: fires when any `any` substring or `word` whole-word
/// trigger is present and no `none` substring is.
///
/// `word` is for triggers too short to match as substrings without false
/// positives ("mic" inside "dynamic"). The `none` list lets a generic rule
/// stand down when the wording is clearly about something a more specific
/// rule owns, even if that rule's own triggers are absent (e.g.
/// "permission" next to "iam").
struct Rule {
    intent: Intent,
    any: &'static [&'static str],
    word: &'static [&'static str],
    none: &'static [&'static str],
}

/// Priority-ordered rule table. First match wins.
const RULES: &[Rule] = &[
    // ── Cloud IAM lookups ───────────────────────────────────────
    Rule {
        intent: Intent::IamListUsers,
        any: &["list users", "list all users", "show users", "iam users", "who has an account"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::IamMfaDevices,
        any: &["mfa", "multi-factor", "multi factor", "2fa"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::IamAccessKeys,
        any: &["access key", "access keys", "api key", "api keys"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::IamUserAccess,
        any: &["groups for", "group membership", "what access", "user access", "permissions for"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::IamPolicy,
        any: &["policy", "policies"],
        word: &[],
        none: &[],
    },
    // ── Knowledge-base topics ───────────────────────────────────
    Rule {
        intent: Intent::Password,
        any: &["password", "passphrase", "locked out"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::Permissions,
        any: &["permission", "access"],
        word: &[],
        // Cloud-identity wording belongs to the IAM rules above; if those
        // didn't fire, a generic KB answer would still be wrong.
        none: &["iam", "aws", "arn"],
    },
    Rule {
        intent: Intent::AudioVideo,
        any: &["camera", "webcam", "microphone"],
        word: &["mic"],
        none: &[],
    },
    Rule {
        intent: Intent::HardwareSoftware,
        any: &["hardware", "software", "laptop", "monitor"],
        word: &[],
        none: &[],
    },
    Rule {
        intent: Intent::Wifi,
        any: &["wifi", "wi-fi", "wireless", "internet"],
        word: &[],
        none: &[],
    },
];

/// Classify free-text input into an intent, or None when nothing matches.
///
/// Matching is case-insensitive; the caller keeps the original casing for
/// downstream argument extraction. Empty and whitespace-only input never
/// match.
pub fn classify(text: &str) -> Option<Intent> {
    let lower = text.to_lowercase();
    let lower = lower.trim();
    if lower.is_empty() {
        return None;
    }

    RULES
        .iter()
        .find(|rule| {
            (matches_any(lower, rule.any) || matches_word(lower, rule.word))
                && !matches_any(lower, rule.none)
        })
        .map(|rule| rule.intent)
}

/// Whether the input asks to end the session: "exit" or "quit" as a whole
/// word, case-insensitive, anywhere in the text.
pub fn is_exit_command(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case("exit") || word.eq_ignore_ascii_case("quit"))
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

/// Check if any of the given words appears as a whole word in the text.
fn matches_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.iter().any(|w| token == *w))
}
