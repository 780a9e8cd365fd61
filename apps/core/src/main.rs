// Zolarus Assistant terminal client.
// A minimal chat loop standing in for the web widget: reads a line, prints
// the reply, follows navigation targets by switching the current page.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zolarus_core::{chips, Assistant, ChatSession, JsonFileStore, Lang};

fn store_path() -> PathBuf {
    PathBuf::from("data").join("assistant_store.json")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lang = std::env::args()
        .nth(1)
        .map(|code| Lang::parse(&code))
        .unwrap_or_default();

    let store = JsonFileStore::open(store_path());
    let mut assistant = Assistant::new(store, "local-user");
    let mut session = ChatSession::new(lang);
    let mut page = "/dashboard".to_string();

    info!(lang = %lang, "assistant session started");

    println!("{}", session.messages()[0].text);
    println!("Try: {}", chips(session.lang()).join(" | "));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("[{}] > ", page);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        session.push_user(input);
        let outcome = assistant.answer(input, &page, session.lang());
        session.push_bot(outcome.reply.clone());
        println!("{}", outcome.reply);

        if let Some(nav) = outcome.nav {
            println!("→ {}", nav);
            // Track only the path; the querystring belongs to the shop.
            page = nav.split('?').next().unwrap_or("/").to_string();
        }
    }

    Ok(())
}
