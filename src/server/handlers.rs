use super::types::{IndexResponse, SERVICE_NAME, SERVICE_VERSION, StatusResponse};
use crate::relay::{Forwarder, InboundResponse, Invocation};
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::Utc;
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// `POST /api/openai`: the raw body is handed over as the event body.
pub async fn event_body(State(state): State<AppState>, body: String) -> InboundResponse {
    info!("Received event body invocation ({} bytes)", body.len());

    let body = (!body.is_empty()).then_some(body);
    state.forwarder.handle(Invocation::EventBody { body }).await
}

/// `POST /api/chat`: the body is parsed by the forwarder, so malformed JSON
/// yields the error envelope instead of an extractor rejection.
pub async fn request_json(State(state): State<AppState>, body: String) -> InboundResponse {
    info!("Received request invocation ({} bytes)", body.len());

    state.forwarder.handle(Invocation::RequestJson { body }).await
}

/// `GET /api/ask?prompt=...`
pub async fn event_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> InboundResponse {
    info!("Received query invocation");

    let query_string_parameters = (!params.is_empty()).then_some(params);
    state
        .forwarder
        .handle(Invocation::EventQuery {
            query_string_parameters,
        })
        .await
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn index() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("/api/openai", "POST - Forward {\"q\": ...} and return the upstream JSON"),
        ("/api/chat", "POST - Forward {\"message\": ...} and return {\"reply\": ...}"),
        ("/api/ask", "GET - Forward ?prompt=... and return {\"reply\": ...}"),
        ("/api/status", "GET - Service status"),
    ]);

    Json(IndexResponse {
        status: "success",
        message: format!("Welcome to {}", SERVICE_NAME),
        version: SERVICE_VERSION,
        endpoints,
        timestamp: Utc::now().to_rfc3339(),
    })
}
