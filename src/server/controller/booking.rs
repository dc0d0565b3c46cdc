use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingListQuery, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            booking::{BookingFilter, CreateBookingParams, UpdateBookingParams},
        },
        service::booking::BookingService,
        state::AppState,
    },
};

pub static BOOKING_TAG: &str = "booking";

/// Reserve a facility time range. The booking starts PENDING.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Outside opening hours, overlapping, or invalid references", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("from" = Option<String>, Query, description = "First booking date (inclusive)"),
        ("to" = Option<String>, Query, description = "Last booking date (inclusive)"),
        ("facility_id" = Option<i32>, Query, description = "Facility filter"),
        ("member_id" = Option<i32>, Query, description = "Member filter"),
        ("coach_id" = Option<i32>, Query, description = "Coach filter"),
        ("status" = Option<String>, Query, description = "Status filter")
    ),
    responses(
        (status = 200, description = "Matching bookings ordered by date and start time", body = [BookingDto])
    ),
    security(("bearer" = []))
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Booking)])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list(BookingFilter::from_query(query))
        .await?;
    let bookings_dto: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 400, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Reschedule or edit a PENDING or CONFIRMED booking.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 400, description = "Terminal booking, overlap or outside opening hours", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db)
        .update(id, UpdateBookingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Confirm a PENDING booking, deducting one session from its pass.
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/confirm",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking confirmed", body = BookingDto),
        (status = 400, description = "Not PENDING or the pass cannot be charged", body = ErrorDto),
        (status = 409, description = "Pass balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db)
        .confirm(id, Some(current.username.clone()))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel a booking, giving back a deducted session.
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 400, description = "Booking already finished", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db)
        .cancel(id, Some(current.username.clone()))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Mark a CONFIRMED booking as a no-show. The deducted session is kept.
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/no-show",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking marked NO_SHOW", body = BookingDto),
        (status = 400, description = "Booking is not CONFIRMED", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn no_show_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db).no_show(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/complete",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking marked COMPLETED", body = BookingDto),
        (status = 400, description = "Booking is not CONFIRMED", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn complete_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Booking)])
        .await?;

    let booking = BookingService::new(&state.db).complete(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Delete a PENDING or CANCELLED booking.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 400, description = "Booking not found or in a later state", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Booking)])
        .await?;

    BookingService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
