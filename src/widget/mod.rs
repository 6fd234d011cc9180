//! Client side of the chat widget, kept free of any document tree.
//!
//! [`ChatController`] owns the conversation state and drives a [`ChatView`];
//! the relay is reached through a [`RelayTransport`], speech through the
//! optional handles in [`Capabilities`].

pub mod capabilities;
pub mod classifier;
pub mod controller;
pub mod reveal;
pub mod state;
pub mod transport;
pub mod view;

pub use capabilities::{Capabilities, SpeechError, SpeechRecognizer, SpeechSynthesizer};
pub use classifier::{
    Classification, KeywordTicketClassifier, RandomTicketNumbers, ReplyClassifier, TicketNumbers,
    decorate_reply,
};
pub use controller::ChatController;
pub use reveal::ScrollReveal;
pub use state::{Sender, UiMessage, WidgetState};
pub use transport::{HttpRelayTransport, RelayTransport, TransportError};
pub use view::ChatView;
