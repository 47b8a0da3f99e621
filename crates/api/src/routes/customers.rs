//! Customer endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::{Customer, UpsertCustomerRequest};
use persistence::repositories::CustomerRepository;

use crate::app::AppState;
use crate::error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let repo = CustomerRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<UpsertCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    request.validate()?;

    let repo = CustomerRepository::new(state.store.clone());
    let customer = repo.insert(Customer::from_request(request)).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, ApiError> {
    let repo = CustomerRepository::new(state.store.clone());
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Customer not found".into()))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertCustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    request.validate()?;

    let repo = CustomerRepository::new(state.store.clone());
    Ok(Json(repo.update(id, request).await?))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = CustomerRepository::new(state.store.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
