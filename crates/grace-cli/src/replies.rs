//! Canned reply text for the non-lookup turns.

pub const GREETING: &str = "\
Hello, I'm Grace, your IT Support Assistant.
I can help with password resets, Wi-Fi issues, permissions, and other common IT problems.
Type 'exit' anytime to close our chat.";

pub const GOODBYE: &str =
    "Goodbye! Remember to reboot if something isn't working — it fixes more than you'd think.";

pub const CLARIFY: &str = "\
I'm not sure which issue this relates to. Could you clarify if it's about \
Wi-Fi, passwords, permissions, or something else?";

pub const IAM_OFFLINE: &str = "\
I'm not connected to the identity service right now, so I can't look up \
accounts or permissions. Please check my configuration.";

pub const ASK_WHO: &str = "\
Who is this for? Tell me like \"... for <username>\" and I'll look them up.";

pub const ASK_WHICH_POLICY: &str = "\
Which policy do you mean? Give me a policy name or an ARN and I'll fetch it.";

/// Deployment problem, distinct from "topic not documented".
pub fn kb_missing(path: &str) -> String {
    format!(
        "My knowledge base file is missing. Please make sure '{path}' is deployed where I can read it."
    )
}

/// External-call failure, with the underlying message verbatim.
pub fn lookup_error(message: &str) -> String {
    format!("I tried to look that up, but I ran into an error: {message}")
}
