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
        attendance::{AttendanceDto, AttendanceListQuery, CheckInDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            attendance::{AttendanceFilter, CheckInParams},
            auth::{CurrentUser, Permission},
        },
        service::attendance::AttendanceService,
        state::AppState,
    },
};

pub static ATTENDANCE_TAG: &str = "attendance";

/// Check a member in, charging one session unless the booking already did.
#[utoipa::path(
    post,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    request_body = CheckInDto,
    responses(
        (status = 201, description = "Member checked in", body = AttendanceDto),
        (status = 400, description = "Booking already checked in, foreign booking or pass, or unusable pass", body = ErrorDto),
        (status = 409, description = "Pass balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn check_in(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CheckInDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Attendance)])
        .await?;

    let attendance = AttendanceService::new(&state.db)
        .check_in(CheckInParams::from_dto(payload, Some(current.username.clone())))
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Record the check-out time; a CONFIRMED booking becomes COMPLETED.
#[utoipa::path(
    post,
    path = "/api/attendances/{id}/check-out",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance ID")),
    responses(
        (status = 200, description = "Member checked out", body = AttendanceDto),
        (status = 400, description = "Attendance not found or already checked out", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn check_out(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Attendance)])
        .await?;

    let attendance = AttendanceService::new(&state.db).check_out(id).await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    params(
        ("member_id" = Option<i32>, Query, description = "Member filter"),
        ("from" = Option<String>, Query, description = "First attendance date (inclusive)"),
        ("to" = Option<String>, Query, description = "Last attendance date (inclusive)")
    ),
    responses(
        (status = 200, description = "Attendances, newest check-in first", body = [AttendanceDto])
    ),
    security(("bearer" = []))
)]
pub async fn list_attendances(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<AttendanceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Attendance)])
        .await?;

    let attendances = AttendanceService::new(&state.db)
        .list(AttendanceFilter::from_query(query))
        .await?;
    let attendances_dto: Vec<_> = attendances.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(attendances_dto)))
}

#[utoipa::path(
    get,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance ID")),
    responses(
        (status = 200, description = "Attendance found", body = AttendanceDto),
        (status = 400, description = "Attendance not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Attendance)])
        .await?;

    let attendance = AttendanceService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// Delete an attendance and give back the sessions it consumed.
#[utoipa::path(
    delete,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance ID")),
    responses(
        (status = 204, description = "Attendance deleted and sessions credited back"),
        (status = 400, description = "Attendance not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Attendance)])
        .await?;

    AttendanceService::new(&state.db)
        .delete(id, Some(current.username.clone()))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
