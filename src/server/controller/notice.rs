use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::notice::{AnnouncementListQuery, CreateAnnouncementDto, UpdateAnnouncementDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            notice::{CreateAnnouncementParams, UpdateAnnouncementParams},
        },
        service::notice::AnnouncementService,
        state::AppState,
    },
};

/// POST /api/announcements - Post an announcement
///
/// # Authentication
/// Requires CREATE on ANNOUNCEMENT
///
/// # Returns
/// - `201 Created`: JSON AnnouncementDto authored by the caller
pub async fn create_announcement(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Announcement)])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .create(CreateAnnouncementParams::from_dto(payload, Some(user.id)))
        .await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// GET /api/announcements - List announcements, pinned first
///
/// # Authentication
/// Requires VIEW on ANNOUNCEMENT
///
/// # Query Parameters
/// - `all`: Include inactive announcements (default false)
pub async fn list_announcements(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<AnnouncementListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Announcement)])
        .await?;

    let announcements = AnnouncementService::new(&state.db).list(query.all).await?;
    let announcements_dto: Vec<_> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(announcements_dto)))
}

/// GET /api/announcements/{id} - Get one announcement
///
/// # Authentication
/// Requires VIEW on ANNOUNCEMENT
pub async fn get_announcement(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Announcement)])
        .await?;

    let announcement = AnnouncementService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// PUT /api/announcements/{id} - Edit, pin or deactivate an announcement
///
/// # Authentication
/// Requires EDIT on ANNOUNCEMENT
pub async fn update_announcement(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Announcement)])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(id, UpdateAnnouncementParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// DELETE /api/announcements/{id} - Delete an announcement
///
/// # Authentication
/// Requires DELETE on ANNOUNCEMENT
pub async fn delete_announcement(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Announcement)])
        .await?;

    AnnouncementService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
