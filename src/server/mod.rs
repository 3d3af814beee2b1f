pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, LlmConfig},
    relay::Forwarder,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::status))
        .route("/api/openai", post(handlers::event_body))
        .route("/api/chat", post(handlers::request_json))
        .route("/api/ask", get(handlers::event_query))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn check_credential(config: &LlmConfig) {
    if config.credential().is_none() {
        warn!("No API key configured; invocations that need one will fail");
    }
}

pub async fn run(config: Config) -> Result<()> {
    check_credential(&config.llm);

    let app_state = handlers::AppState {
        forwarder: Arc::new(Forwarder::new(&config.llm)),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
