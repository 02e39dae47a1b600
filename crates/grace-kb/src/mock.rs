//! Mock knowledge-base source for testing — serves pre-loaded content.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{KbError, KbResult};
use crate::source::KbSource;

/// A mock source serving pre-loaded file content by path.
#[derive(Default)]
pub struct MockKbSource {
    files: HashMap<String, String>,
}

impl MockKbSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content under a path.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// A small sample knowledge base covering the stock helpdesk topics.
    pub fn with_sample_kb(path: impl Into<String>) -> Self {
        Self::new().with_file(
            path,
            "\
=== PASSWORD RESET INSTRUCTIONS ===
Go to reset.example.com and follow the prompts.
Contact the helpdesk if your account is locked.

=== PERMISSIONS / ACCESS REQUEST INSTRUCTIONS ===
File an access request ticket with your manager's approval.

=== WEBCAM & MICROPHONE TROUBLESHOOTING ===
Check that no other application is holding the device.

=== HARDWARE & SOFTWARE REQUEST INSTRUCTIONS ===
Submit a procurement ticket with a cost center code.

=== WIFI CONNECTION TROUBLESHOOTING ===
Restart your router.
",
        )
    }
}

#[async_trait]
impl KbSource for MockKbSource {
    async fn read_lines(&self, path: &str) -> KbResult<Vec<String>> {
        let content = self.read_all(path).await?;
        Ok(content.lines().map(String::from).collect())
    }

    async fn read_all(&self, path: &str) -> KbResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| KbError::FileMissing(path.to_string()))
    }

    async fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_registered_content() {
        let source = MockKbSource::new().with_file("kb.txt", "=== A ===\nbody");
        let lines = source.read_lines("kb.txt").await.unwrap();
        assert_eq!(lines, vec!["=== A ===", "body"]);
        assert!(source.exists("kb.txt").await);
    }

    #[tokio::test]
    async fn unknown_path_is_file_missing() {
        let source = MockKbSource::new();
        let err = source.read_lines("ghost.txt").await.unwrap_err();
        assert!(matches!(err, KbError::FileMissing(p) if p == "ghost.txt"));
    }
}
