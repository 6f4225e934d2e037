//! HTTP endpoint server using Axum

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::scheduler::{RefreshService, RefreshState};
use crate::models::Snapshot;
use crate::summary::summary_text;

pub const SERVICE_NAME: &str = "marketpulse";

#[derive(Clone)]
pub struct AppState {
    pub refresh: RefreshService,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(refresh: RefreshService) -> Self {
        Self {
            refresh,
            start_time: Arc::new(Instant::now()),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let current = state.refresh.current();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "service": SERVICE_NAME,
        "refresh_status": current.status,
        "last_updated": current.last_updated,
    }))
}

fn unavailable(state: &RefreshState) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": state.status,
            "error": state.error,
            "last_updated": state.last_updated,
        })),
    )
        .into_response()
}

/// Latest snapshot as JSON
async fn get_snapshot(State(state): State<AppState>) -> Result<Json<Snapshot>, Response> {
    let current = state.refresh.current();
    match current.snapshot {
        Some(snapshot) => Ok(Json(snapshot)),
        None => Err(unavailable(&current)),
    }
}

/// Latest snapshot as a plain-text summary
async fn get_summary(State(state): State<AppState>) -> Response {
    let current = state.refresh.current();
    match &current.snapshot {
        Some(snapshot) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            summary_text(snapshot),
        )
            .into_response(),
        None => unavailable(&current),
    }
}

/// Trigger a refresh now
async fn trigger_refresh(State(state): State<AppState>) -> Json<Value> {
    let outcome = state.refresh.refresh().await;
    Json(json!({ "outcome": outcome }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/summary", get(get_summary))
        .route("/api/refresh", post(trigger_refresh))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    refresh: RefreshService,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(AppState::new(refresh));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
