use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(%rejection, "unreadable chat body");
        AppError::MissingFields
    })?;

    let chat = payload.validate()?;
    let reply = generate_reply(state.provider.as_ref(), &chat).await?;

    Ok(Json(ChatResponse { reply }))
}

// Any verb other than POST. The body is never read.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
