//! E2E tests for the knowledge-base and LLM turn paths, exit handling, and
//! the transcript format.

mod helpers;

use helpers::TestHarness;

use grace_cli::transcript::Transcript;
use grace_cli::session::Session;
use grace_core::FallbackPool;
use grace_kb::{KbStore, MockKbSource};
use regex::Regex;

/// A wifi question returns the wifi section verbatim.
#[tokio::test]
async fn e2e_wifi_turn() {
    let mut h = TestHarness::kb_only("wifi_turn");
    let turn = h.session.handle_turn("my wifi is down").await;
    assert_eq!(turn.reply, "Restart your router.");
    assert!(!turn.farewell);
}

/// Casing does not change classification or extraction.
#[tokio::test]
async fn e2e_case_insensitive_classification() {
    let mut h = TestHarness::kb_only("casing");
    let turn = h.session.handle_turn("MY WI-FI IS DOWN").await;
    assert_eq!(turn.reply, "Restart your router.");
}

/// Each KB topic resolves to its own section.
#[tokio::test]
async fn e2e_all_kb_topics_resolve() {
    let mut h = TestHarness::kb_only("all_topics");
    let cases = [
        ("I forgot my password", "reset.example.com"),
        ("I need access to the shared drive", "access request ticket"),
        ("my webcam is broken", "holding the device"),
        ("requesting new hardware", "procurement ticket"),
    ];
    for (input, expect) in cases {
        let turn = h.session.handle_turn(input).await;
        assert!(
            turn.reply.contains(expect),
            "{input:?} should answer with {expect:?}, got {:?}",
            turn.reply
        );
    }
}

/// Unmatched turns without an LLM get the clarification prompt.
#[tokio::test]
async fn e2e_unmatched_without_llm_clarifies() {
    let mut h = TestHarness::kb_only("clarify");
    let turn = h.session.handle_turn("my stapler is haunted").await;
    assert!(turn.reply.contains("not sure which issue"));
}

/// Unmatched turns with an LLM get the completion verbatim.
#[tokio::test]
async fn e2e_unmatched_with_llm_forwards() {
    let mut h = TestHarness::full("llm_forward", &["Scheduled an exorcism for your stapler."]);
    let turn = h.session.handle_turn("my stapler is haunted").await;
    assert_eq!(turn.reply, "Scheduled an exorcism for your stapler.");
}

/// Undocumented topics rotate the fallback pool cyclically across turns.
#[tokio::test]
async fn e2e_fallback_rotation_across_turns() {
    let store = KbStore::new(
        Box::new(MockKbSource::new().with_file("kb.txt", "=== UNRELATED ===\nnothing useful")),
        "kb.txt",
    );
    let path = std::env::temp_dir().join(format!("grace_e2e_{}_rotation.log", std::process::id()));
    let mut session = Session::new(store, Transcript::new(path.to_string_lossy().to_string()))
        .with_fallbacks(FallbackPool::new(["first", "second", "third"]));

    let mut replies = Vec::new();
    for _ in 0..4 {
        replies.push(session.handle_turn("wifi is down again").await.reply);
    }
    assert_eq!(replies, ["first", "second", "third", "first"]);
    let _ = std::fs::remove_file(&path);
}

/// "exit" ends the session and logs exactly one final grace entry.
#[tokio::test]
async fn e2e_exit_logs_one_farewell() {
    let mut h = TestHarness::kb_only("exit");
    h.session.handle_turn("my wifi is down").await;
    let turn = h.session.handle_turn("exit").await;
    assert!(turn.farewell);
    assert!(turn.reply.contains("Goodbye"));

    let lines = h.transcript_lines();
    // Two turns, two lines each; the last line is the single farewell.
    assert_eq!(lines.len(), 4);
    let grace_goodbyes = lines
        .iter()
        .filter(|l| l.contains("| grace:") && l.contains("Goodbye"))
        .count();
    assert_eq!(grace_goodbyes, 1);
    assert!(lines[3].contains("Goodbye"));
}

/// Whole-word exit detection: "quit" mid-sentence ends the session,
/// "exits" does not.
#[tokio::test]
async fn e2e_exit_whole_word_only() {
    let mut h = TestHarness::kb_only("exit_words");
    assert!(!h.session.handle_turn("where are the exits").await.farewell);
    assert!(h.session.handle_turn("ok quit now").await.farewell);
}

/// Every transcript line matches `YYYY-MM-DD HH:MM:SS | ROLE: MESSAGE`.
#[tokio::test]
async fn e2e_transcript_line_format() {
    let mut h = TestHarness::kb_only("format");
    h.session.handle_turn("my wifi is down").await;
    h.session.handle_turn("something unclassifiable").await;

    let re = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \| (user|grace): .+$").unwrap();
    let lines = h.transcript_lines();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert!(re.is_match(line), "bad transcript line: {line:?}");
    }
    assert!(lines[0].contains("| user: my wifi is down"));
    assert!(lines[1].contains("| grace: Restart your router."));
}
