//! Location endpoints. Locations are seeded and read-only.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use domain::models::Location;
use persistence::repositories::LocationRepository;

use crate::app::AppState;
use crate::error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations/:id", get(get_location))
}

async fn list_locations(State(state): State<AppState>) -> Result<Json<Vec<Location>>, ApiError> {
    let repo = LocationRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, ApiError> {
    let repo = LocationRepository::new(state.store.clone());
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Location not found".into()))
}
