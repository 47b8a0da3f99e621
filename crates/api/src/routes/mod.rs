//! HTTP route handlers.

pub mod bookings;
pub mod cars;
pub mod customers;
pub mod health;
pub mod locations;
pub mod notifications;

use axum::Router;

use crate::app::AppState;

/// Router for everything under `/api/v1`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(cars::router())
        .merge(bookings::router())
        .merge(customers::router())
        .merge(locations::router())
        .merge(notifications::router())
}
