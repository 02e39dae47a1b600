//! Grace — command-line IT helpdesk assistant.
//!
//! Wires the knowledge base, the optional AWS boundaries, and the chat
//! transcript into a single synchronous prompt/reply loop.

use std::io::{BufRead, Write};

use tracing_subscriber::EnvFilter;

use grace_cli::config::GraceConfig;
use grace_cli::replies;
use grace_cli::session::Session;
use grace_cli::transcript::Transcript;
use grace_iam::AwsIam;
use grace_kb::{FileKbSource, KbSource, KbStore};
use grace_llm::BedrockChat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1);
    let config = GraceConfig::load(config_path.as_deref())?;
    tracing::info!(
        kb_path = %config.kb_path,
        iam_enabled = config.iam.enabled,
        llm_enabled = config.llm.enabled,
        "grace starting"
    );

    let kb = KbStore::new(Box::new(FileKbSource), config.kb_path.clone());
    let transcript = Transcript::new(config.transcript_path.clone());
    let mut session = Session::new(kb, transcript);

    // One shared AWS credential/region resolution for both boundaries.
    // Missing credentials here is the only fatal condition: reported once,
    // the chat loop never starts.
    if config.iam.enabled || config.llm.enabled {
        let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        grace_cli::startup::ensure_aws_credentials(&aws).await?;

        if config.iam.enabled {
            let client = aws_sdk_iam::Client::new(&aws);
            session = session.with_iam(Box::new(AwsIam::new(client)));
        }

        if config.llm.enabled {
            let client = aws_sdk_bedrockruntime::Client::new(&aws);
            let mut chat = BedrockChat::new(client, config.llm.model.clone());
            if config.llm.include_kb_context {
                match FileKbSource.read_all(&config.kb_path).await {
                    Ok(contents) => chat = chat.with_context(contents),
                    Err(e) => {
                        tracing::warn!(error = %e, "knowledge base unavailable as LLM context")
                    }
                }
            }
            session = session.with_llm(Box::new(chat));
        }
    }

    println!("{}", replies::GREETING);
    println!();

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        line.clear();
        let read = stdin.lock().read_line(&mut line)?;

        // EOF behaves like "exit": one farewell, one final transcript entry.
        let input = if read == 0 { "exit" } else { line.trim_end() };

        let turn = session.handle_turn(input).await;
        println!("Grace: {}", turn.reply);
        if turn.farewell {
            break;
        }
    }

    Ok(())
}
