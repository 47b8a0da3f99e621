//! Booking endpoints: creation, listing, lifecycle transitions, receipts,
//! and per-booking scheduled emails.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    Booking, BookingReasonRequest, BookingStatus, CreateBookingRequest, Notification,
    NotificationKind, NotificationPriority, ScheduleEmailRequest, ScheduledEmail,
};
use domain::services::{build_receipt, DateRange, Receipt};
use persistence::repositories::{
    BookingRepository, CarRepository, CustomerRepository, NewBooking, NotificationRepository,
    ScheduledEmailRepository,
};
use shared::dates::parse_calendar_date;
use shared::pagination::{decode_cursor, encode_cursor};

use crate::app::AppState;
use crate::error::ApiError;

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    pub limit: Option<usize>,
    pub cursor: Option<String>,
    pub status: Option<BookingStatus>,
    pub car_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub items: Vec<Booking>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/:id", get(get_booking))
        .route("/bookings/:id/approve", post(approve_booking))
        .route("/bookings/:id/reject", post(reject_booking))
        .route("/bookings/:id/cancel", post(cancel_booking))
        .route("/bookings/:id/complete", post(complete_booking))
        .route("/bookings/:id/receipt", get(get_receipt))
        .route(
            "/bookings/:id/emails",
            get(list_booking_emails).post(schedule_email),
        )
        .route("/bookings/:id/emails/:email_id", delete(cancel_email))
}

/// Creates a pending booking.
///
/// The availability check and the insert run atomically inside the
/// repository, so two requests racing for the same dates cannot both win.
/// Side effects after a successful insert: the customer record is upserted,
/// an admin notification is pushed, and a confirmation email is scheduled.
async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    request.validate()?;

    let start = parse_calendar_date(&request.start_date)
        .map_err(|e| ApiError::Validation(format!("startDate: {}", e)))?;
    let end = parse_calendar_date(&request.end_date)
        .map_err(|e| ApiError::Validation(format!("endDate: {}", e)))?;
    let range = DateRange::new(start, end)?;

    let bookings = BookingRepository::new(state.store.clone());
    let booking = bookings
        .create(NewBooking {
            car_id: request.car_id,
            location_id: request.location_id,
            customer_name: request.name.clone(),
            customer_email: request.email.clone(),
            customer_phone: request.phone.clone(),
            range,
        })
        .await?;

    let customers = CustomerRepository::new(state.store.clone());
    customers
        .record_booking(
            &request.name,
            &request.email,
            &request.phone,
            booking.total_price,
        )
        .await?;

    let car_name = car_display_name(&state, booking.car_id).await?;
    let notifications = NotificationRepository::new(state.store.clone());
    notifications
        .push(Notification::new(
            NotificationKind::NewBooking,
            "New booking received",
            format!(
                "{} booked {} ({} to {})",
                booking.customer_name, car_name, booking.start_date, booking.end_date
            ),
            NotificationPriority::High,
            Some(booking.id),
        ))
        .await?;

    if state.config.email.enabled {
        let emails = ScheduledEmailRepository::new(state.store.clone());
        emails
            .insert(ScheduledEmail::new(
                booking.id,
                booking.customer_email.clone(),
                ScheduleEmailRequest {
                    template: domain::models::EmailTemplate::BookingConfirmation,
                    subject: format!("Booking request received - {}", booking.confirmation_code),
                    body: format!(
                        "Hi {}, we received your booking for {} from {} to {}. \
                         Your confirmation code is {}.",
                        booking.customer_name,
                        car_name,
                        booking.start_date,
                        booking.end_date,
                        booking.confirmation_code
                    ),
                    scheduled_for: chrono::Utc::now(),
                },
            ))
            .await?;
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let after = match &query.cursor {
        Some(cursor) => Some(
            decode_cursor(cursor).map_err(|e| ApiError::Validation(format!("cursor: {}", e)))?,
        ),
        None => None,
    };

    let repo = BookingRepository::new(state.store.clone());
    let page = repo
        .list_page(limit, after, query.status, query.car_id)
        .await?;

    let next_cursor = if page.has_more {
        page.items
            .last()
            .map(|b| encode_cursor(b.created_at, b.id))
    } else {
        None
    };

    Ok(Json(BookingListResponse {
        items: page.items,
        next_cursor,
        has_more: page.has_more,
    }))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let repo = BookingRepository::new(state.store.clone());
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Booking not found".into()))
}

async fn approve_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    transition(&state, id, BookingStatus::Confirmed, None, "Booking approved").await
}

/// Rejecting a pending booking cancels it with the given reason.
async fn reject_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<BookingReasonRequest>,
) -> Result<Json<Booking>, ApiError> {
    request.validate()?;
    transition(
        &state,
        id,
        BookingStatus::Cancelled,
        Some(request.reason),
        "Booking rejected",
    )
    .await
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<BookingReasonRequest>,
) -> Result<Json<Booking>, ApiError> {
    request.validate()?;
    transition(
        &state,
        id,
        BookingStatus::Cancelled,
        Some(request.reason),
        "Booking cancelled",
    )
    .await
}

async fn complete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    transition(
        &state,
        id,
        BookingStatus::Completed,
        None,
        "Booking completed",
    )
    .await
}

async fn transition(
    state: &AppState,
    id: Uuid,
    next: BookingStatus,
    reason: Option<String>,
    title: &str,
) -> Result<Json<Booking>, ApiError> {
    let repo = BookingRepository::new(state.store.clone());
    let booking = repo.transition(id, next, reason).await?;

    let notifications = NotificationRepository::new(state.store.clone());
    notifications
        .push(Notification::new(
            NotificationKind::BookingUpdate,
            title,
            format!(
                "Booking {} for {} is now {}",
                booking.confirmation_code, booking.customer_name, booking.status
            ),
            NotificationPriority::Medium,
            Some(booking.id),
        ))
        .await?;

    Ok(Json(booking))
}

/// Receipt for a completed booking. The subtotal is the price fixed at
/// booking time; the tax rate comes from configuration.
async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Receipt>, ApiError> {
    let bookings = BookingRepository::new(state.store.clone());
    let booking = bookings
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;

    if booking.status != BookingStatus::Completed {
        return Err(ApiError::Conflict(
            "Receipts are only available for completed bookings".into(),
        ));
    }

    Ok(Json(build_receipt(
        &booking,
        state.config.pricing.tax_rate,
    )))
}

async fn schedule_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScheduleEmailRequest>,
) -> Result<(StatusCode, Json<ScheduledEmail>), ApiError> {
    request.validate()?;

    let bookings = BookingRepository::new(state.store.clone());
    let booking = bookings
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;

    let emails = ScheduledEmailRepository::new(state.store.clone());
    let email = emails
        .insert(ScheduledEmail::new(
            booking.id,
            booking.customer_email.clone(),
            request,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(email)))
}

async fn list_booking_emails(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ScheduledEmail>>, ApiError> {
    let bookings = BookingRepository::new(state.store.clone());
    if bookings.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("Booking not found".into()));
    }

    let emails = ScheduledEmailRepository::new(state.store.clone());
    Ok(Json(emails.list_for_booking(id).await?))
}

async fn cancel_email(
    State(state): State<AppState>,
    Path((id, email_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let emails = ScheduledEmailRepository::new(state.store.clone());
    let email = emails
        .find_by_id(email_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Scheduled email not found".into()))?;

    if email.booking_id != id {
        return Err(ApiError::NotFound("Scheduled email not found".into()));
    }

    emails.cancel(email_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn car_display_name(state: &AppState, car_id: Uuid) -> Result<String, ApiError> {
    let cars = CarRepository::new(state.store.clone());
    Ok(cars
        .find_by_id(car_id)
        .await?
        .map(|c| c.display_name())
        .unwrap_or_else(|| "unknown car".to_string()))
}
