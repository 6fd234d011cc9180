//! Line-oriented client for the relay, driving the same controller the widget uses.
//!
//! `/lang <tag>` switches the response language, `/quit` exits.

use campus_assistant::widget::{
    Capabilities, ChatController, ChatView, HttpRelayTransport, Sender, UiMessage,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_RELAY_URL: &str = "http://localhost:3000";

struct TerminalView;

impl ChatView for TerminalView {
    fn append_message(&mut self, message: &UiMessage) {
        match message.sender {
            Sender::User => println!("you> {}", message.text),
            Sender::Bot => println!("bot> {}\n", message.text),
        }
    }

    fn show_typing(&mut self) {
        println!("bot> ...");
    }

    fn hide_typing(&mut self) {}

    fn set_active_language(&mut self, language: &str) {
        println!("(language set to {language})");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let relay_url = std::env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let transport = HttpRelayTransport::new(&relay_url);
    let chat = ChatController::new(transport, TerminalView, Capabilities::none());

    // The event notice arrives on its own timer while input is already being read.
    let _welcome = chat.run_welcome_sequence();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ') {
            _ if line == "/quit" => break,
            Some(("/lang", tag)) if !tag.trim().is_empty() => {
                chat.select_language(tag.trim());
            }
            _ => {
                chat.submit(line).await;
            }
        }
    }

    Ok(())
}
