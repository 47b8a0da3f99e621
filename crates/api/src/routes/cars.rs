//! Fleet endpoints, including the per-car availability and pricing surface.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain::models::{Car, CreateCarRequest, UpdateCarRequest};
use domain::services::{
    blocked_dates, is_range_available, rental_days, rental_price, utilization, DateRange,
};
use persistence::repositories::{BookingRepository, CarRepository};
use shared::dates::parse_calendar_date;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
    pub days: i64,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDatesResponse {
    pub blocked_dates: Vec<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationResponse {
    pub utilization: f64,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/available", get(list_available_cars))
        .route("/cars/:id", get(get_car).put(update_car))
        .route("/cars/:id/availability", get(check_availability))
        .route("/cars/:id/blocked-dates", get(get_blocked_dates))
        .route("/cars/:id/utilization", get(get_utilization))
}

fn parse_range(query: &DateRangeQuery) -> Result<DateRange, ApiError> {
    let start = parse_calendar_date(&query.start)
        .map_err(|e| ApiError::Validation(format!("start: {}", e)))?;
    let end = parse_calendar_date(&query.end)
        .map_err(|e| ApiError::Validation(format!("end: {}", e)))?;
    Ok(DateRange::new(start, end)?)
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, ApiError> {
    let repo = CarRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    request.validate()?;

    let repo = CarRepository::new(state.store.clone());
    let car = repo.insert(Car::from_request(request)).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// Lists cars free over the requested range. Cars flagged unavailable are
/// excluded regardless of their booking calendar.
async fn list_available_cars(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<Car>>, ApiError> {
    let range = parse_range(&query)?;

    let cars = CarRepository::new(state.store.clone());
    let bookings = BookingRepository::new(state.store.clone());

    let mut free = Vec::new();
    for car in cars.list().await? {
        if !car.available {
            continue;
        }
        let car_bookings = bookings.list_for_car(car.id).await?;
        if is_range_available(&range, &car_bookings) {
            free.push(car);
        }
    }

    Ok(Json(free))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Car>, ApiError> {
    let repo = CarRepository::new(state.store.clone());
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Car not found".into()))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<Car>, ApiError> {
    request.validate()?;

    let repo = CarRepository::new(state.store.clone());
    Ok(Json(repo.update(id, request).await?))
}

/// Availability check with a price quote for the requested range.
async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let range = parse_range(&query)?;

    let cars = CarRepository::new(state.store.clone());
    let car = cars
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Car not found".into()))?;

    let bookings = BookingRepository::new(state.store.clone());
    let car_bookings = bookings.list_for_car(id).await?;

    let available = car.available && is_range_available(&range, &car_bookings);

    Ok(Json(AvailabilityResponse {
        available,
        days: rental_days(&range),
        total_price: rental_price(car.price_per_day, &range),
    }))
}

/// Every calendar day covered by a blocking booking for this car.
async fn get_blocked_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlockedDatesResponse>, ApiError> {
    let cars = CarRepository::new(state.store.clone());
    if cars.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("Car not found".into()));
    }

    let bookings = BookingRepository::new(state.store.clone());
    let car_bookings = bookings.list_for_car(id).await?;

    Ok(Json(BlockedDatesResponse {
        blocked_dates: blocked_dates(&car_bookings).into_iter().collect(),
    }))
}

/// Percentage of days in the window occupied by blocking bookings.
async fn get_utilization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<UtilizationResponse>, ApiError> {
    let range = parse_range(&query)?;

    let cars = CarRepository::new(state.store.clone());
    if cars.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("Car not found".into()));
    }

    let bookings = BookingRepository::new(state.store.clone());
    let car_bookings = bookings.list_for_car(id).await?;

    Ok(Json(UtilizationResponse {
        utilization: utilization(&car_bookings, &range),
    }))
}
