//! Line-oriented chat loop over stdin.

use std::io::Write;

use plugchat_ai::{Message, Role, SessionStore, UsageTracker};
use plugchat_common::PlugchatError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Empty,
    History,
    Usage,
    Reset,
    Quit,
    Unknown(&'a str),
    Say(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => Command::Empty,
            "/history" => Command::History,
            "/usage" => Command::Usage,
            "/reset" => Command::Reset,
            "/quit" | "/exit" => Command::Quit,
            cmd if cmd.starts_with('/') => Command::Unknown(cmd),
            text => Command::Say(text),
        }
    }
}

pub async fn run(store: SessionStore) -> Result<(), PlugchatError> {
    let (mut id, mut session) = store.create().await;
    info!(session = %id, "interactive session started");
    println!("plugchat {} - type /quit to exit", env!("CARGO_PKG_VERSION"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::History => {
                for message in session.lock().await.history() {
                    println!("{}", format_message(&message));
                }
            }
            Command::Usage => println!("{}", format_usage(session.lock().await.usage())),
            Command::Reset => {
                store.remove(&id).await;
                (id, session) = store.create().await;
                info!(session = %id, "session reset");
                println!("started a new conversation");
            }
            Command::Unknown(cmd) => {
                println!("unknown command {cmd} (try /history, /usage, /reset, /quit)")
            }
            Command::Say(text) => {
                let reply = session.lock().await.submit(text).await;
                println!("{reply}");
            }
        }
    }

    store.remove(&id).await;
    Ok(())
}

fn format_message(message: &Message) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
        Role::System => "system",
        Role::Function => "function",
    };
    format!("{speaker}: {}", message.content)
}

fn format_usage(usage: &UsageTracker) -> String {
    let tokens = usage.tokens();
    format!(
        "completions: {}, tokens: {} (prompt {}, completion {}), tool calls: {} ({} failed)",
        usage.completions(),
        usage.total_tokens(),
        tokens.prompt_tokens,
        tokens.completion_tokens,
        usage.tool_calls(),
        usage.tool_failures(),
    )
}
