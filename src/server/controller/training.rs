use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use entity::role_permission::Area;

use crate::{
    model::training::{
        CreateBaseballRecordDto, CreateTrainingLogDto, SeasonQuery, UpdateBaseballRecordDto,
        UpdateTrainingLogDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            training::{
                CreateBaseballRecordParams, CreateTrainingLogParams, UpdateBaseballRecordParams,
                UpdateTrainingLogParams,
            },
        },
        service::training::{BaseballRecordService, TrainingLogService},
        state::AppState,
    },
};

/// POST /api/training-logs - Record a training session
///
/// # Authentication
/// Requires CREATE on TRAINING
///
/// # Returns
/// - `201 Created`: JSON TrainingLogDto
/// - `400 Bad Request`: Validation failure, unknown member or coach
pub async fn create_training_log(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateTrainingLogDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Training)])
        .await?;

    let log = TrainingLogService::new(&state.db)
        .create(CreateTrainingLogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}

/// GET /api/training-logs/{id} - Get one training log
///
/// # Authentication
/// Requires VIEW on TRAINING
pub async fn get_training_log(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Training)])
        .await?;

    let log = TrainingLogService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}

/// GET /api/members/{id}/training-logs - A member's training logs, newest first
///
/// # Authentication
/// Requires VIEW on TRAINING
pub async fn list_member_training_logs(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Training)])
        .await?;

    let logs = TrainingLogService::new(&state.db)
        .list_by_member(member_id)
        .await?;
    let logs_dto: Vec<_> = logs.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(logs_dto)))
}

/// PUT /api/training-logs/{id} - Update a training log
///
/// # Authentication
/// Requires EDIT on TRAINING
pub async fn update_training_log(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateTrainingLogDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Training)])
        .await?;

    let log = TrainingLogService::new(&state.db)
        .update(id, UpdateTrainingLogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}

/// DELETE /api/training-logs/{id} - Delete a training log
///
/// # Authentication
/// Requires DELETE on TRAINING
pub async fn delete_training_log(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Training)])
        .await?;

    TrainingLogService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/baseball-records - Record one game's batting line
///
/// # Authentication
/// Requires CREATE on TRAINING
///
/// # Returns
/// - `201 Created`: JSON BaseballRecordDto with derived rates
/// - `400 Bad Request`: Validation failure, unknown member, or more at-bats than plate appearances
pub async fn create_baseball_record(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateBaseballRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Training)])
        .await?;

    let record = BaseballRecordService::new(&state.db)
        .create(CreateBaseballRecordParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// GET /api/baseball-records/{id} - Get one game record
///
/// # Authentication
/// Requires VIEW on TRAINING
pub async fn get_baseball_record(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Training)])
        .await?;

    let record = BaseballRecordService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// GET /api/members/{id}/baseball-records - A member's game records
///
/// # Authentication
/// Requires VIEW on TRAINING
pub async fn list_member_baseball_records(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Training)])
        .await?;

    let records = BaseballRecordService::new(&state.db)
        .list_by_member(member_id)
        .await?;
    let records_dto: Vec<_> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(records_dto)))
}

/// GET /api/members/{id}/baseball-records/season - Season totals and averages
///
/// # Authentication
/// Requires VIEW on TRAINING
///
/// # Query Parameters
/// - `year`: Calendar year (default: current year)
///
/// # Returns
/// - `200 OK`: JSON SeasonTotalDto
/// - `400 Bad Request`: Member not found
pub async fn get_season_total(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(member_id): Path<i32>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Training)])
        .await?;

    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let total = BaseballRecordService::new(&state.db)
        .season_total(member_id, year)
        .await?;

    Ok((StatusCode::OK, Json(total.into_dto())))
}

/// PUT /api/baseball-records/{id} - Update a game record
///
/// # Authentication
/// Requires EDIT on TRAINING
pub async fn update_baseball_record(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateBaseballRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Training)])
        .await?;

    let record = BaseballRecordService::new(&state.db)
        .update(id, UpdateBaseballRecordParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// DELETE /api/baseball-records/{id} - Delete a game record
///
/// # Authentication
/// Requires DELETE on TRAINING
pub async fn delete_baseball_record(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Training)])
        .await?;

    BaseballRecordService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
