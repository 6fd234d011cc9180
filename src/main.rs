use std::sync::Arc;

use anyhow::Context;
use campus_assistant::{
    config::Config,
    routes,
    services::gemini::GeminiProvider,
    state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_assistant=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let provider = GeminiProvider::new(&config.gemini).context("building provider client")?;
    let state = Arc::new(AppState::new(Arc::new(provider)));

    let app = routes::create_router(&config.public_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, model = %config.gemini.model, "campus assistant relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
