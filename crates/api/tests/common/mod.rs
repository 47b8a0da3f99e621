//! Shared helpers for integration tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use car_rental_api::app::{create_app, AppState};
use car_rental_api::config::Config;
use persistence::Store;

/// Builds an app over a seeded store with test configuration.
pub fn create_test_app() -> Router {
    let state = AppState::new(Store::seeded(), Config::for_test());
    create_app(state)
}

/// Builds an app over an empty store.
#[allow(dead_code)]
pub fn create_empty_app() -> Router {
    let state = AppState::new(Store::new(), Config::for_test());
    create_app(state)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn parse_response_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sends a request to the app and asserts the expected status code.
pub async fn send(app: &Router, request: Request<Body>, expected: StatusCode) -> Response {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), expected);
    response
}
