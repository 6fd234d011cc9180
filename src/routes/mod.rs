// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, method_not_allowed};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const CHAT_PATH: &str = "/api/chatbot";

/// Relay routes, with the widget's static assets served from `public_dir`.
pub fn create_router(public_dir: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route(CHAT_PATH, post(chat_handler).fallback(method_not_allowed))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}
