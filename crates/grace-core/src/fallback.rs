//! Round-robin pool of canned replies for turns the knowledge base can't
//! answer.

use std::collections::VecDeque;

/// Default apology set, rotated in order across turns.
pub const DEFAULT_FALLBACKS: &[&str] = &[
    "I'm unable to locate my internal IT support instructions at the moment. Please check back later.",
    "I can't seem to find the right section in my knowledge base. Let's double-check the topic together.",
    "I don't have that information stored yet, but I can help you with Wi-Fi, password resets, or access requests.",
    "I'm missing the documentation for that issue right now. You might want to contact the IT Helpdesk for further assistance.",
];

/// Rotating fallback message pool: each draw takes the front message and
/// requeues it at the back, so N consecutive draws cycle through all N
/// messages before repeating.
#[derive(Debug, Clone)]
pub struct FallbackPool {
    messages: VecDeque<String>,
}

impl FallbackPool {
    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Draw the next message, advancing the rotation. An empty pool serves
    /// the first default message rather than panicking.
    pub fn next_message(&mut self) -> String {
        match self.messages.pop_front() {
            Some(msg) => {
                self.messages.push_back(msg.clone());
                msg
            }
            None => DEFAULT_FALLBACKS[0].to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACKS.iter().copied())
    }
}
