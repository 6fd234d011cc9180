// src/services/gemini.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::{ChatProvider, ProviderError, Turn, TurnRole};
use crate::config::GeminiConfig;

/// Google Generative Language API, `generateContent` endpoint.
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: TurnRole,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiProvider {
    pub fn new(config: &GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

fn request_body<'a>(context: &'a [Turn], message: &'a str) -> GenerateContentRequest<'a> {
    let contents = context
        .iter()
        .map(|turn| Content {
            role: turn.role,
            parts: [Part { text: &turn.text }],
        })
        .chain(std::iter::once(Content {
            role: TurnRole::User,
            parts: [Part { text: message }],
        }))
        .collect();

    GenerateContentRequest { contents }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::Blocked(reason));
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        Err(ProviderError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn complete(&self, context: &[Turn], message: &str) -> Result<String, ProviderError> {
        let body = request_body(context, message);
        debug!(turns = body.contents.len(), "sending generateContent request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_places_user_message_after_context() {
        let context = [
            Turn::new(TurnRole::User, "instructions"),
            Turn::new(TurnRole::Model, "ok"),
        ];
        let body = serde_json::to_value(request_body(&context, "hello")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "instructions" }] },
                    { "role": "model", "parts": [{ "text": "ok" }] },
                    { "role": "user", "parts": [{ "text": "hello" }] },
                ]
            })
        );
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Fees are due " }, { "text": "October 15, 2025." }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Fees are due October 15, 2025.");
    }

    #[test]
    fn empty_and_blocked_responses_are_errors() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(extract_text(empty), Err(ProviderError::EmptyResponse)));

        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert!(matches!(extract_text(blocked), Err(ProviderError::Blocked(r)) if r == "SAFETY"));
    }
}
