//! Section header grammar and extraction.

use regex::Regex;
use std::sync::LazyLock;

// Generic header line: `=== LABEL TEXT ===` with a non-empty label.
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^===\s*\S.*?\s*===$").unwrap());

/// Whether a line's trimmed content is a section header of any label.
pub fn is_header_line(line: &str) -> bool {
    RE_HEADER.is_match(line.trim())
}

/// Extract the section under `header` from the file's lines.
///
/// Accumulation starts after the line whose trimmed content equals `header`
/// exactly (case-sensitive, delimiters included) and stops at the next line
/// matching the generic header grammar — sections never cross a header
/// boundary. The header line itself is not part of the content.
///
/// Returns the content trimmed of leading/trailing whitespace, or `None`
/// when the header is absent or the section trims to empty.
pub fn extract_section<S: AsRef<str>>(lines: &[S], header: &str) -> Option<String> {
    let mut content: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in lines {
        let line = line.as_ref();
        if line.trim() == header {
            in_section = true;
            continue;
        }
        if in_section && is_header_line(line) {
            break;
        }
        if in_section {
            content.push(line);
        }
    }

    let text = content.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
