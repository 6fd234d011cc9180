use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A rendered chat line. Display only, never sent back to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiMessage {
    pub sender: Sender,
    pub text: String,
}

impl UiMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetState {
    pub language: String,
    pub popup_open: bool,
    pub messages: Vec<UiMessage>,
    pub input: String,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            popup_open: false,
            messages: Vec::new(),
            input: String::new(),
        }
    }
}
