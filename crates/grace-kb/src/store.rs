//! Knowledge-base store: per-lookup reads over a `KbSource`.

use crate::error::KbResult;
use crate::section::extract_section;
use crate::source::KbSource;

/// A knowledge base bound to one file path.
///
/// Every lookup re-reads the file — the operator may edit it between turns
/// and the file is the single source of truth. No caching by design.
pub struct KbStore {
    source: Box<dyn KbSource>,
    path: String,
}

impl KbStore {
    pub fn new(source: Box<dyn KbSource>, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up the section under `header`.
    ///
    /// `Ok(Some(text))` — section found, verbatim content trimmed;
    /// `Ok(None)` — file readable but topic not documented;
    /// `Err(KbError::FileMissing)` — deployment problem, distinct message.
    pub async fn section(&self, header: &str) -> KbResult<Option<String>> {
        let lines = self.source.read_lines(&self.path).await?;
        let section = extract_section(&lines, header);
        tracing::debug!(header, found = section.is_some(), "kb lookup");
        Ok(section)
    }

    /// Full knowledge-base text, used as optional LLM context.
    pub async fn contents(&self) -> KbResult<String> {
        self.source.read_all(&self.path).await
    }
}
