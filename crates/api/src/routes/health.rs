//! Health check endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadyResponse {
    status: &'static str,
    cars: usize,
    locations: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/health/live", get(live))
        .route("/api/health/ready", get(ready))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "car-rental-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn live() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "car-rental-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness reports the store contents so orchestration can tell an empty
/// store from a seeded one.
async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let inner = state.store.read().await;
    Json(ReadyResponse {
        status: "ready",
        cars: inner.cars.len(),
        locations: inner.locations.len(),
    })
}
