use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::capabilities::Capabilities;
use super::classifier::{
    KeywordTicketClassifier, RandomTicketNumbers, ReplyClassifier, TicketNumbers, decorate_reply,
};
use super::state::{DEFAULT_LANGUAGE, Sender, UiMessage, WidgetState};
use super::transport::{RelayTransport, TransportError};
use super::view::ChatView;
use crate::message::ChatRequest;

pub const GREETING: &str = "Hello! I am the Campus AI Assistant. How can I help you today?";

pub const EVENT_NOTICE: &str = "🔔 **Event Notification:** The 'Mid-Term Prep Workshop Series' for all first-year students is happening next week, from Oct 6th to Oct 8th. Check the college portal for the full schedule!";

pub const APOLOGY: &str =
    "I'm having trouble connecting to my brain right now. Please try again in a moment.";

pub const LISTENING_PLACEHOLDER: &str = "Listening...";
pub const IDLE_PLACEHOLDER: &str = "Type or use mic...";

pub const EVENT_NOTICE_DELAY: Duration = Duration::from_millis(1000);
pub const AUTO_SEND_DELAY: Duration = Duration::from_millis(500);

struct Widget<V> {
    state: WidgetState,
    view: V,
    classifier: Box<dyn ReplyClassifier>,
    tickets: Box<dyn TicketNumbers>,
}

impl<V: ChatView> Widget<V> {
    fn push(&mut self, message: UiMessage) {
        self.view.append_message(&message);
        self.state.messages.push(message);
    }
}

type Shared<V> = Arc<Mutex<Widget<V>>>;

fn lock<V>(shared: &Shared<V>) -> std::sync::MutexGuard<'_, Widget<V>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the widget state and drives a [`ChatView`].
///
/// The controller is a cheap handle: clones share the same state. The state
/// lock is only taken for synchronous steps and never across an `.await`, so
/// popup toggling, language changes and speech stay available while a relay
/// request or a timer is pending.
pub struct ChatController<T, V> {
    shared: Shared<V>,
    transport: Arc<T>,
    capabilities: Capabilities,
}

impl<T, V> Clone for ChatController<T, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            transport: Arc::clone(&self.transport),
            capabilities: self.capabilities.clone(),
        }
    }
}

/// Removes the typing indicator when dropped, including when the turn's
/// future is cancelled mid-request.
struct TypingIndicator<V: ChatView> {
    shared: Shared<V>,
}

impl<V: ChatView> TypingIndicator<V> {
    fn show(shared: &Shared<V>) -> Self {
        lock(shared).view.show_typing();
        Self {
            shared: Arc::clone(shared),
        }
    }
}

impl<V: ChatView> Drop for TypingIndicator<V> {
    fn drop(&mut self) {
        lock(&self.shared).view.hide_typing();
    }
}

impl<T, V> ChatController<T, V>
where
    T: RelayTransport + 'static,
    V: ChatView + Send + 'static,
{
    /// Applies the capability gate to the view once; the microphone stays
    /// hidden for the controller's lifetime when recognition is unavailable.
    pub fn new(transport: T, mut view: V, capabilities: Capabilities) -> Self {
        let state = WidgetState::default();
        view.set_active_language(DEFAULT_LANGUAGE);
        view.set_mic_visible(capabilities.can_listen());
        view.set_placeholder(IDLE_PLACEHOLDER);

        Self {
            shared: Arc::new(Mutex::new(Widget {
                state,
                view,
                classifier: Box::new(KeywordTicketClassifier),
                tickets: Box::new(RandomTicketNumbers),
            })),
            transport: Arc::new(transport),
            capabilities,
        }
    }

    pub fn with_classifier(self, classifier: impl ReplyClassifier + 'static) -> Self {
        lock(&self.shared).classifier = Box::new(classifier);
        self
    }

    pub fn with_ticket_numbers(self, tickets: impl TicketNumbers + 'static) -> Self {
        lock(&self.shared).tickets = Box::new(tickets);
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WidgetState {
        lock(&self.shared).state.clone()
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&lock(&self.shared).view)
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn toggle_popup(&self) -> bool {
        let mut widget = lock(&self.shared);
        widget.state.popup_open = !widget.state.popup_open;
        let open = widget.state.popup_open;
        widget.view.set_popup_visible(open);
        open
    }

    /// Switches the language used by the next turn and by speech.
    /// Returns false when `language` is already active.
    pub fn select_language(&self, language: &str) -> bool {
        let mut widget = lock(&self.shared);
        if widget.state.language == language {
            return false;
        }
        widget.state.language = language.to_string();
        widget.view.set_active_language(language);
        true
    }

    pub fn set_input(&self, text: impl Into<String>) {
        lock(&self.shared).state.input = text.into();
    }

    /// Sends the current input as one turn. Returns false if there was nothing to send.
    ///
    /// Turns may overlap; each one shows and removes its own typing indicator.
    pub async fn send_message(&self) -> bool {
        let Some(request) = self.begin_turn() else {
            return false;
        };

        let typing = TypingIndicator::show(&self.shared);
        let result = self.transport.send(&request).await;
        drop(typing);

        self.finish_turn(result);
        true
    }

    /// Shorthand for typing `text` and pressing send.
    pub async fn submit(&self, text: impl Into<String>) -> bool {
        self.set_input(text);
        self.send_message().await
    }

    fn begin_turn(&self) -> Option<ChatRequest> {
        let mut widget = lock(&self.shared);
        let text = widget.state.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        widget.push(UiMessage::user(&text));
        widget.state.input.clear();
        widget.view.set_input("");

        Some(ChatRequest::new(text, widget.state.language.clone()))
    }

    fn finish_turn(&self, result: Result<String, TransportError>) {
        let mut widget = lock(&self.shared);
        let reply = match result {
            Ok(reply) => {
                let Widget {
                    classifier, tickets, ..
                } = &mut *widget;
                decorate_reply(reply, &**classifier, &mut **tickets)
            }
            Err(e) => {
                warn!(error = %e, "Error fetching AI response");
                APOLOGY.to_string()
            }
        };
        widget.push(UiMessage::bot(reply));
    }

    pub fn show_welcome(&self) {
        lock(&self.shared).push(UiMessage::bot(GREETING));
    }

    pub fn show_event_notice(&self) {
        lock(&self.shared).push(UiMessage::bot(EVENT_NOTICE));
    }

    /// Greeting now; the event notice is scheduled [`EVENT_NOTICE_DELAY`] later.
    /// No relay traffic.
    pub fn run_welcome_sequence(&self) -> JoinHandle<()> {
        self.show_welcome();
        let chat = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(EVENT_NOTICE_DELAY).await;
            chat.show_event_notice();
        })
    }

    /// Starts recognition in the current language. Returns false when the
    /// capability is missing or refused to start.
    pub fn start_listening(&self) -> bool {
        let Some(recognizer) = self.capabilities.recognizer() else {
            return false;
        };

        let language = lock(&self.shared).state.language.clone();
        match recognizer.start(&language) {
            Ok(()) => {
                lock(&self.shared).view.set_placeholder(LISTENING_PLACEHOLDER);
                true
            }
            Err(e) => {
                warn!(error = %e, "speech recognition failed to start");
                false
            }
        }
    }

    pub fn finish_listening(&self) {
        lock(&self.shared).view.set_placeholder(IDLE_PLACEHOLDER);
    }

    /// First recognition result: fill the input now and schedule a send
    /// [`AUTO_SEND_DELAY`] later. The handle resolves to whether a turn was sent.
    pub fn handle_transcript(&self, transcript: &str) -> JoinHandle<bool> {
        {
            let mut widget = lock(&self.shared);
            widget.state.input = transcript.to_string();
            widget.view.set_input(transcript);
        }

        let chat = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_SEND_DELAY).await;
            chat.send_message().await
        })
    }

    /// Reads a bot message aloud in the current language.
    pub fn speak(&self, index: usize) -> bool {
        let Some(synthesizer) = self.capabilities.synthesizer() else {
            return false;
        };
        let (message, language) = {
            let widget = lock(&self.shared);
            (widget.state.messages.get(index).cloned(), widget.state.language.clone())
        };
        match message {
            Some(message) if message.sender == Sender::Bot => {
                synthesizer.speak(&message.text, &language);
                true
            }
            _ => {
                debug!(index, "no bot message to speak");
                false
            }
        }
    }
}
