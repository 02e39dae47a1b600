//! Append-only chat transcript.
//!
//! One line per message, `YYYY-MM-DD HH:MM:SS | ROLE: MESSAGE`. The file is
//! a product artifact (never read back), separate from operational
//! `tracing` output. Write failures are logged and never abort a turn.

use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;
use grace_core::Role;

pub struct Transcript {
    path: String,
}

impl Transcript {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Append one message. Multi-line replies are collapsed to keep the
    /// one-line-per-message format.
    pub fn append(&self, role: Role, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format_line(&timestamp.to_string(), role, message);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            tracing::warn!(path = %self.path, error = %e, "transcript append failed");
        }
    }
}

fn format_line(timestamp: &str, role: Role, message: &str) -> String {
    let flat = message.replace('\n', " ");
    format!("{timestamp} | {role}: {flat}")
}
