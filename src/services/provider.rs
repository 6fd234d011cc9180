// src/services/provider.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

/// One exchange in the context sent to the text-generation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("provider blocked the prompt: {0}")]
    Blocked(String),
}

/// Opaque text completion: prior turns plus one new user message in, text out.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, context: &[Turn], message: &str) -> Result<String, ProviderError>;
}
