use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::message::{ChatRequest, ChatResponse};
use crate::routes::CHAT_PATH;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("relay answered with status {0}")]
    Status(u16),
}

/// How the widget reaches the relay.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<String, TransportError>;
}

pub struct HttpRelayTransport {
    client: Client,
    endpoint: String,
}

impl HttpRelayTransport {
    /// `base_url` is the origin serving the relay, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, TransportError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.reply)
    }
}

#[async_trait]
impl<T: RelayTransport + ?Sized> RelayTransport for std::sync::Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<String, TransportError> {
        (**self).send(request).await
    }
}
