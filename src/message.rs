// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of `POST /api/chatbot`.
///
/// Both fields are optional at the serde level so a missing field surfaces as
/// the relay's own 400 payload instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            language: Some(language.into()),
        }
    }

    pub fn validate(self) -> Result<ValidChat, AppError> {
        match (non_empty(self.message), non_empty(self.language)) {
            (Some(message), Some(language)) => Ok(ValidChat { message, language }),
            _ => Err(AppError::MissingFields),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidChat {
    pub message: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
