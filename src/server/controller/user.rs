use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::{
        api::PaginationQuery,
        user::{ChangePasswordDto, UpdateUserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            user::UpdateUserParams,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// GET /api/users - List staff accounts
///
/// # Authentication
/// Requires VIEW on USER
///
/// # Query Parameters
/// - `page`: Zero-based page number (default 0)
/// - `entries`: Page size (default 20)
///
/// # Returns
/// - `200 OK`: JSON PageDto of UserDto
/// - `403 Forbidden`: Permission denied
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::User)])
        .await?;

    let users = UserService::new(&state.db)
        .list(query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// GET /api/users/{id} - Get one staff account
///
/// # Authentication
/// Requires VIEW on USER
///
/// # Returns
/// - `200 OK`: JSON UserDto
/// - `400 Bad Request`: User not found
pub async fn get_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::User)])
        .await?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/users/{id} - Update name, role, active flag or coach link
///
/// # Authentication
/// Requires EDIT on USER
///
/// # Returns
/// - `200 OK`: JSON UserDto after the update
/// - `400 Bad Request`: Validation failure, unknown user or coach
pub async fn update_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::User)])
        .await?;

    let user = UserService::new(&state.db)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/users/{id}/approve - Approve a registered account
///
/// # Authentication
/// Requires EDIT on USER
///
/// # Returns
/// - `200 OK`: JSON UserDto with `approved = true`
/// - `400 Bad Request`: User not found
pub async fn approve_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::User)])
        .await?;

    let user = UserService::new(&state.db).approve(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/users/{id}/password - Change a password
///
/// Users changing their own password must supply the current one. Changing
/// another account's password requires EDIT on USER and skips that check.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `204 No Content`: Password replaced
/// - `401 Unauthorized`: Current password missing or wrong
/// - `403 Forbidden`: Changing another account without permission
pub async fn change_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let own_account = id == current.id;
    let guard = AuthGuard::new(&state.db, &current);
    if own_account {
        guard.require(&[]).await?;
    } else {
        guard.require(&[Permission::edit(Area::User)]).await?;
    }

    UserService::new(&state.db)
        .change_password(
            id,
            payload.current_password.as_deref(),
            &payload.new_password,
            own_account,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id} - Delete a staff account
///
/// # Authentication
/// Requires DELETE on USER
///
/// # Returns
/// - `204 No Content`: Account deleted
/// - `400 Bad Request`: Unknown user or attempt to delete oneself
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::User)])
        .await?;

    UserService::new(&state.db).delete(id, current.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
