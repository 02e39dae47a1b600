//! Argument extraction from free-text input.

/// How a policy was referred to in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyRef<'a> {
    Arn(&'a str),
    Name(&'a str),
}

// Filler words that never name a policy.
const POLICY_STOPWORDS: &[&str] = &[
    "the", "a", "an", "that", "this", "my", "our", "show", "view", "fetch", "get", "iam", "aws",
];

/// Pull a username out of text like "list access keys for JSmith".
///
/// Tokenizes on whitespace, finds the first token equal to "for"
/// (case-insensitive), and returns the next token trimmed of surrounding
/// punctuation. The original casing is preserved — usernames are
/// case-sensitive even though intent matching is not.
pub fn username_argument(text: &str) -> Option<&str> {
    let mut words = text.split_whitespace();
    words.find(|w| w.eq_ignore_ascii_case("for"))?;
    let candidate = words.next()?;
    let name = candidate.trim_matches(|c: char| c.is_ascii_punctuation());
    if name.is_empty() { None } else { Some(name) }
}

/// Pull a policy reference out of text like "show the ReadOnlyAccess policy"
/// or "fetch policy arn:aws:iam::aws:policy/ReadOnlyAccess".
///
/// An `arn:`-prefixed token wins outright; otherwise the token after a
/// "for" anchor, then the token adjacent to the word "policy", skipping
/// filler words. Casing is preserved — policy names are matched by the
/// boundary, not here.
pub fn policy_argument(text: &str) -> Option<PolicyRef<'_>> {
    let words: Vec<&str> = text.split_whitespace().collect();

    if let Some(arn) = words.iter().map(|w| trim_token(w)).find(|w| w.starts_with("arn:")) {
        return Some(PolicyRef::Arn(arn));
    }

    if let Some(name) = username_argument(text) {
        return Some(PolicyRef::Name(name));
    }

    let at = words
        .iter()
        .position(|w| trim_token(w).eq_ignore_ascii_case("policy"))?;

    // Prefer the preceding token ("ReadOnlyAccess policy"), then the
    // following one ("policy ReadOnlyAccess").
    let before = at.checked_sub(1).map(|i| trim_token(words[i]));
    let after = words.get(at + 1).map(|w| trim_token(w));
    [before, after]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty() && !is_policy_stopword(t))
        .map(PolicyRef::Name)
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation() && c != ':' && c != '/' && c != '-')
}

fn is_policy_stopword(token: &str) -> bool {
    POLICY_STOPWORDS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(token))
}
