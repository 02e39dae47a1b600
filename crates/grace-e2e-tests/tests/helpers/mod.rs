//! Shared test harness for E2E session tests.
//!
//! Builds a `Session` over the mock knowledge base, mock IAM backend, and
//! scripted chat model, with a throwaway transcript file the tests can read
//! back for format assertions.

use grace_cli::session::Session;
use grace_cli::transcript::Transcript;
use grace_iam::MockIam;
use grace_kb::{KbStore, MockKbSource};
use grace_llm::MockChatModel;

pub const KB_PATH: &str = "kb.txt";

/// A session plus the transcript path it writes to.
pub struct TestHarness {
    pub session: Session,
    pub transcript_path: std::path::PathBuf,
}

impl TestHarness {
    /// Full stack: sample KB, sample IAM fixtures, scripted LLM replies.
    pub fn full(name: &str, llm_replies: &[&str]) -> Self {
        let transcript_path = temp_path(name);
        let session = Session::new(sample_kb(), transcript(&transcript_path))
            .with_iam(Box::new(MockIam::with_sample_data()))
            .with_llm(Box::new(MockChatModel::new(llm_replies.iter().copied())));
        Self {
            session,
            transcript_path,
        }
    }

    /// KB only: no cloud boundaries wired.
    pub fn kb_only(name: &str) -> Self {
        let transcript_path = temp_path(name);
        let session = Session::new(sample_kb(), transcript(&transcript_path));
        Self {
            session,
            transcript_path,
        }
    }

    /// KB + IAM, no LLM.
    pub fn with_iam(name: &str, iam: MockIam) -> Self {
        let transcript_path = temp_path(name);
        let session = Session::new(sample_kb(), transcript(&transcript_path))
            .with_iam(Box::new(iam));
        Self {
            session,
            transcript_path,
        }
    }

    /// Read the transcript back as lines.
    pub fn transcript_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.transcript_path)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.transcript_path);
    }
}

fn sample_kb() -> KbStore {
    KbStore::new(Box::new(MockKbSource::with_sample_kb(KB_PATH)), KB_PATH)
}

fn transcript(path: &std::path::Path) -> Transcript {
    Transcript::new(path.to_string_lossy().to_string())
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let file = format!("grace_e2e_{}_{}.log", std::process::id(), name);
    std::env::temp_dir().join(file)
}
