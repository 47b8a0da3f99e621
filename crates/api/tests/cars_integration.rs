//! Integration tests for fleet and availability endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{create_test_app, get_request, json_request, parse_response_body, send};

async fn first_car(app: &axum::Router) -> Value {
    let response = send(app, get_request("/api/v1/cars"), StatusCode::OK).await;
    let cars: Vec<Value> = parse_response_body(response).await;
    assert!(!cars.is_empty(), "seeded store should contain cars");
    cars[0].clone()
}

fn booking_payload(car: &Value, start: &str, end: &str) -> Value {
    json!({
        "carId": car["id"],
        "locationId": car["locationId"],
        "name": "Alice Example",
        "email": "alice@example.com",
        "phone": "+1 555 123 4567",
        "startDate": start,
        "endDate": end,
    })
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = create_test_app();
    send(&app, get_request("/api/health"), StatusCode::OK).await;
    send(&app, get_request("/api/health/live"), StatusCode::OK).await;

    let response = send(&app, get_request("/api/health/ready"), StatusCode::OK).await;
    let body: Value = parse_response_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["cars"], 6);
}

#[tokio::test]
async fn test_list_seeded_cars() {
    let app = create_test_app();
    let response = send(&app, get_request("/api/v1/cars"), StatusCode::OK).await;
    let cars: Vec<Value> = parse_response_body(response).await;
    assert_eq!(cars.len(), 6);
}

#[tokio::test]
async fn test_create_and_get_car() {
    let app = create_test_app();

    let locations_response = send(&app, get_request("/api/v1/locations"), StatusCode::OK).await;
    let locations: Vec<Value> = parse_response_body(locations_response).await;

    let payload = json!({
        "make": "Volkswagen",
        "model": "Golf",
        "year": 2023,
        "transmission": "manual",
        "fuelType": "gasoline",
        "seats": 5,
        "pricePerDay": "45.00",
        "locationId": locations[0]["id"],
    });

    let response = send(
        &app,
        json_request("POST", "/api/v1/cars", payload),
        StatusCode::CREATED,
    )
    .await;
    let car: Value = parse_response_body(response).await;
    assert_eq!(car["make"], "Volkswagen");
    assert_eq!(car["available"], true);

    let uri = format!("/api/v1/cars/{}", car["id"].as_str().unwrap());
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let fetched: Value = parse_response_body(response).await;
    assert_eq!(fetched["id"], car["id"]);
}

#[tokio::test]
async fn test_create_car_rejects_invalid_year() {
    let app = create_test_app();

    let payload = json!({
        "make": "DeLorean",
        "model": "DMC-12",
        "year": 1955,
        "transmission": "manual",
        "fuelType": "gasoline",
        "seats": 2,
        "pricePerDay": "99.00",
        "locationId": "00000000-0000-0000-0000-000000000000",
    });

    send(
        &app,
        json_request("POST", "/api/v1/cars", payload),
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn test_availability_quote_counts_days_inclusively() {
    let app = create_test_app();
    let car = first_car(&app).await;

    // Same-day rental counts as one day.
    let uri = format!(
        "/api/v1/cars/{}/availability?start=2030-06-10&end=2030-06-10",
        car["id"].as_str().unwrap()
    );
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let quote: Value = parse_response_body(response).await;
    assert_eq!(quote["available"], true);
    assert_eq!(quote["days"], 1);

    let uri = format!(
        "/api/v1/cars/{}/availability?start=2030-06-10&end=2030-06-14",
        car["id"].as_str().unwrap()
    );
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let quote: Value = parse_response_body(response).await;
    assert_eq!(quote["days"], 5);
}

#[tokio::test]
async fn test_availability_rejects_inverted_range() {
    let app = create_test_app();
    let car = first_car(&app).await;

    let uri = format!(
        "/api/v1/cars/{}/availability?start=2030-06-14&end=2030-06-10",
        car["id"].as_str().unwrap()
    );
    send(&app, get_request(&uri), StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_booked_range_shows_unavailable_and_blocked() {
    let app = create_test_app();
    let car = first_car(&app).await;
    let car_id = car["id"].as_str().unwrap().to_string();

    send(
        &app,
        json_request(
            "POST",
            "/api/v1/bookings",
            booking_payload(&car, "2030-07-01", "2030-07-03"),
        ),
        StatusCode::CREATED,
    )
    .await;

    // A range sharing the boundary day conflicts.
    let uri = format!(
        "/api/v1/cars/{}/availability?start=2030-07-03&end=2030-07-05",
        car_id
    );
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let quote: Value = parse_response_body(response).await;
    assert_eq!(quote["available"], false);

    // The day after the booking ends is free.
    let uri = format!(
        "/api/v1/cars/{}/availability?start=2030-07-04&end=2030-07-06",
        car_id
    );
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let quote: Value = parse_response_body(response).await;
    assert_eq!(quote["available"], true);

    let uri = format!("/api/v1/cars/{}/blocked-dates", car_id);
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let body: Value = parse_response_body(response).await;
    let blocked = body["blockedDates"].as_array().unwrap();
    assert_eq!(blocked.len(), 3);
    assert_eq!(blocked[0], "2030-07-01");
    assert_eq!(blocked[2], "2030-07-03");
}

#[tokio::test]
async fn test_available_cars_excludes_booked_car() {
    let app = create_test_app();
    let car = first_car(&app).await;
    let car_id = car["id"].as_str().unwrap().to_string();

    send(
        &app,
        json_request(
            "POST",
            "/api/v1/bookings",
            booking_payload(&car, "2030-08-01", "2030-08-05"),
        ),
        StatusCode::CREATED,
    )
    .await;

    let response = send(
        &app,
        get_request("/api/v1/cars/available?start=2030-08-03&end=2030-08-04"),
        StatusCode::OK,
    )
    .await;
    let free: Vec<Value> = parse_response_body(response).await;
    assert_eq!(free.len(), 5);
    assert!(free.iter().all(|c| c["id"].as_str().unwrap() != car_id));
}

#[tokio::test]
async fn test_utilization_over_window() {
    let app = create_test_app();
    let car = first_car(&app).await;
    let car_id = car["id"].as_str().unwrap().to_string();

    // 5 booked days in a 10-day window.
    send(
        &app,
        json_request(
            "POST",
            "/api/v1/bookings",
            booking_payload(&car, "2030-09-01", "2030-09-05"),
        ),
        StatusCode::CREATED,
    )
    .await;

    let uri = format!(
        "/api/v1/cars/{}/utilization?start=2030-09-01&end=2030-09-10",
        car_id
    );
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let body: Value = parse_response_body(response).await;
    assert!((body["utilization"].as_f64().unwrap() - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_get_unknown_car_is_not_found() {
    let app = create_test_app();
    send(
        &app,
        get_request("/api/v1/cars/00000000-0000-0000-0000-000000000000"),
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[tokio::test]
async fn test_update_car_price() {
    let app = create_test_app();
    let car = first_car(&app).await;

    let uri = format!("/api/v1/cars/{}", car["id"].as_str().unwrap());
    let response = send(
        &app,
        json_request("PUT", &uri, json!({ "pricePerDay": "72.50" })),
        StatusCode::OK,
    )
    .await;
    let updated: Value = parse_response_body(response).await;
    assert_eq!(updated["pricePerDay"], "72.50");
}

#[tokio::test]
async fn test_update_car_rejects_unknown_location() {
    let app = create_test_app();
    let car = first_car(&app).await;

    let uri = format!("/api/v1/cars/{}", car["id"].as_str().unwrap());
    send(
        &app,
        json_request(
            "PUT",
            &uri,
            json!({ "locationId": "00000000-0000-0000-0000-000000000000" }),
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    // The car keeps its original location.
    let response = send(&app, get_request(&uri), StatusCode::OK).await;
    let fetched: Value = parse_response_body(response).await;
    assert_eq!(fetched["locationId"], car["locationId"]);
}
