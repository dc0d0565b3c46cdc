use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;
use serde::Deserialize;

use crate::{
    model::coach::{CreateCoachDto, StudentCountDto, UpdateCoachDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            coach::{CreateCoachParams, UpdateCoachParams},
        },
        service::coach::CoachService,
        state::AppState,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct CoachListQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// POST /api/coaches - Create a coach
///
/// # Authentication
/// Requires CREATE on COACH
///
/// # Returns
/// - `201 Created`: JSON CoachDto
pub async fn create_coach(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateCoachDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Coach)])
        .await?;

    let coach = CoachService::new(&state.db)
        .create(CreateCoachParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(coach.into_dto())))
}

/// GET /api/coaches - List coaches
///
/// # Authentication
/// Requires VIEW on COACH
///
/// # Returns
/// - `200 OK`: JSON array of CoachDto
pub async fn list_coaches(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<CoachListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Coach)])
        .await?;

    let coaches = CoachService::new(&state.db).list(query.active_only).await?;
    let coaches_dto: Vec<_> = coaches.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(coaches_dto)))
}

/// GET /api/coaches/{id} - Get one coach
///
/// # Authentication
/// Requires VIEW on COACH
///
/// # Returns
/// - `200 OK`: JSON CoachDto
/// - `400 Bad Request`: Coach not found
pub async fn get_coach(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Coach)])
        .await?;

    let coach = CoachService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// PUT /api/coaches/{id} - Update a coach
///
/// # Authentication
/// Requires EDIT on COACH
///
/// # Returns
/// - `200 OK`: JSON CoachDto after the update
/// - `400 Bad Request`: Validation failure or coach not found
pub async fn update_coach(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateCoachDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Coach)])
        .await?;

    let coach = CoachService::new(&state.db)
        .update(id, UpdateCoachParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// DELETE /api/coaches/{id} - Delete a coach
///
/// Accounts, members, passes, products and bookings referencing the coach
/// lose the reference.
///
/// # Authentication
/// Requires DELETE on COACH
///
/// # Returns
/// - `204 No Content`: Coach deleted
/// - `400 Bad Request`: Coach not found
pub async fn delete_coach(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Coach)])
        .await?;

    CoachService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/coaches/{id}/students - List members coached by a coach
///
/// Members assigned directly, through a pass coach override or through a
/// booking with the coach, each listed once.
///
/// # Authentication
/// Requires VIEW on COACH
///
/// # Returns
/// - `200 OK`: JSON array of MemberDto ordered by id
/// - `400 Bad Request`: Coach not found
pub async fn get_students(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Coach)])
        .await?;

    let students = CoachService::new(&state.db).students(id).await?;
    let students_dto: Vec<_> = students.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(students_dto)))
}

/// GET /api/coaches/{id}/students/count - Count a coach's students
///
/// # Authentication
/// Requires VIEW on COACH
///
/// # Returns
/// - `200 OK`: JSON StudentCountDto
pub async fn get_student_count(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Coach)])
        .await?;

    let count = CoachService::new(&state.db).student_count(id).await?;

    Ok((
        StatusCode::OK,
        Json(StudentCountDto {
            coach_id: id,
            count,
        }),
    ))
}
