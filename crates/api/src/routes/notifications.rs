//! Admin notification feed endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::models::Notification;
use persistence::repositories::NotificationRepository;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    #[serde(default)]
    pub unread: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications).delete(clear_all))
        .route("/notifications/unread-count", get(unread_count))
        .route("/notifications/read-all", post(mark_all_read))
        .route("/notifications/:id/read", post(mark_read))
        .route("/notifications/:id", delete(delete_notification))
}

async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    Ok(Json(repo.list(query.unread).await?))
}

async fn unread_count(State(state): State<AppState>) -> Result<Json<UnreadCountResponse>, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    Ok(Json(UnreadCountResponse {
        count: repo.unread_count().await?,
    }))
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    repo.mark_read(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn mark_all_read(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    repo.mark_all_read().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_all(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let repo = NotificationRepository::new(state.store.clone());
    repo.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
