//! Knowledge-base source abstraction — read KB text from files or mocks.

use async_trait::async_trait;

use crate::error::{KbError, KbResult};

/// Abstraction for reading knowledge-base text.
///
/// Enables mocking for tests and swappable backends. The file is always
/// read in full — the knowledge base is small and the file on disk is the
/// single source of truth between turns.
#[async_trait]
pub trait KbSource: Send + Sync {
    /// Read all lines from the given path.
    async fn read_lines(&self, path: &str) -> KbResult<Vec<String>>;

    /// Read the full contents of the given path as one string.
    async fn read_all(&self, path: &str) -> KbResult<String>;

    /// Check whether the path exists and is readable.
    async fn exists(&self, path: &str) -> bool;
}

/// Reads the knowledge base from the local filesystem.
pub struct FileKbSource;

#[async_trait]
impl KbSource for FileKbSource {
    async fn read_lines(&self, path: &str) -> KbResult<Vec<String>> {
        let content = self.read_all(path).await?;
        Ok(content.lines().map(String::from).collect())
    }

    async fn read_all(&self, path: &str) -> KbResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KbError::FileMissing(path.to_string())
            } else {
                KbError::Io {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_file_missing() {
        let err = FileKbSource
            .read_lines("/nonexistent/grace/knowledgebase.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, KbError::FileMissing(_)));
    }

    #[tokio::test]
    async fn missing_file_does_not_exist() {
        assert!(!FileKbSource.exists("/nonexistent/grace/knowledgebase.txt").await);
    }
}
