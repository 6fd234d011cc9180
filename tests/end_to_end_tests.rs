use campus_assistant::routes::create_router;
use campus_assistant::services::knowledge_base::{TICKET_CREATED, TICKET_OFFER};
use campus_assistant::services::provider::{ChatProvider, ProviderError, Turn};
use campus_assistant::state::AppState;
use campus_assistant::widget::controller::APOLOGY;
use campus_assistant::widget::{Capabilities, ChatController, ChatView, HttpRelayTransport, UiMessage};

use async_trait::async_trait;
use std::sync::Arc;

/// Answers from the fee-deadline line of the knowledge base and follows the
/// two-step ticket dialogue the instruction turn asks for.
struct CampusHelper;

#[async_trait]
impl ChatProvider for CampusHelper {
    async fn complete(&self, context: &[Turn], message: &str) -> Result<String, ProviderError> {
        assert_eq!(context.len(), 2);
        let lower = message.to_lowercase();
        if lower.contains("tuition fee deadline") {
            Ok("The final date to pay tuition fees for the current semester is October 15, 2025, without a late fine.".into())
        } else if lower.contains("raise a ticket") {
            Ok(TICKET_OFFER.into())
        } else if lower.contains("isn't working") {
            Ok(TICKET_CREATED.into())
        } else {
            Ok("I don't have information on that topic, but I can create a support ticket for you.".into())
        }
    }
}

struct Unreachable;

#[async_trait]
impl ChatProvider for Unreachable {
    async fn complete(&self, _: &[Turn], _: &str) -> Result<String, ProviderError> {
        Err(ProviderError::EmptyResponse)
    }
}

#[derive(Default)]
struct NullView;

impl ChatView for NullView {
    fn append_message(&mut self, _: &UiMessage) {}
    fn show_typing(&mut self) {}
    fn hide_typing(&mut self) {}
}

async fn spawn_relay(provider: Arc<dyn ChatProvider>) -> String {
    let app = create_router("public").with_state(Arc::new(AppState::new(provider)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn widget(base_url: &str) -> ChatController<HttpRelayTransport, NullView> {
    ChatController::new(HttpRelayTransport::new(base_url), NullView, Capabilities::none())
}

fn last_reply(chat: &ChatController<HttpRelayTransport, NullView>) -> String {
    chat.state().messages.last().unwrap().text.clone()
}

#[tokio::test]
async fn fee_deadline_question_renders_plain_reply() {
    let base = spawn_relay(Arc::new(CampusHelper)).await;
    let chat = widget(&base);

    chat.submit("When is the tuition fee deadline?").await;

    let reply = last_reply(&chat);
    assert!(reply.contains("October 15, 2025"));
    assert!(!reply.contains('#'));
}

#[tokio::test]
async fn ticket_dialogue_ends_with_ticket_number() {
    let base = spawn_relay(Arc::new(CampusHelper)).await;
    let chat = widget(&base);

    chat.submit("I want to raise a ticket, my Wi-Fi isn't working").await;
    assert_eq!(last_reply(&chat), TICKET_OFFER);

    chat.submit("The Wi-Fi in my hostel room isn't working").await;
    let reply = last_reply(&chat);
    assert!(reply.starts_with("Your ticket has been created. Your ticket number is #"));
    let digits: String = reply
        .split('#')
        .nth(1)
        .unwrap()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    assert_eq!(digits.len(), 5);
}

#[tokio::test]
async fn provider_failure_reaches_user_as_apology() {
    let base = spawn_relay(Arc::new(Unreachable)).await;
    let chat = widget(&base);

    chat.submit("hello").await;
    assert_eq!(last_reply(&chat), APOLOGY);
}

#[tokio::test]
async fn unreachable_relay_reaches_user_as_apology() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let chat = widget(&format!("http://{addr}"));
    chat.submit("hello").await;
    assert_eq!(last_reply(&chat), APOLOGY);
}
