use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;
use serde_json::json;

use crate::{
    model::permission::UpdatePermissionDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::{CurrentUser, Permission},
            permission::PermissionFlags,
        },
        service::role_permission::RolePermissionService,
        state::AppState,
    },
};

/// GET /api/role-permissions/{role} - Get the effective matrix of a role
///
/// # Authentication
/// Requires VIEW on SETTINGS
///
/// # Returns
/// - `200 OK`: JSON array of PermissionDto, one per area
pub async fn get_matrix(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Settings)])
        .await?;

    let matrix = RolePermissionService::new(&state.db).matrix(&role).await?;
    let matrix_dto: Vec<_> = matrix.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(matrix_dto)))
}

/// PUT /api/role-permissions/{role}/{area} - Override one area of a role
///
/// # Authentication
/// Requires EDIT on SETTINGS
///
/// # Returns
/// - `200 OK`: JSON PermissionDto of the stored override
/// - `400 Bad Request`: Unknown role or ADMIN
pub async fn update_permission(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((role, area)): Path<(String, Area)>,
    Json(payload): Json<UpdatePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Settings)])
        .await?;

    let permission = RolePermissionService::new(&state.db)
        .update(&role, area, PermissionFlags::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(permission.into_dto())))
}

/// DELETE /api/role-permissions/{role} - Drop every override of a role
///
/// # Authentication
/// Requires DELETE on SETTINGS
///
/// # Returns
/// - `200 OK`: `{"removed": n}`
/// - `400 Bad Request`: Unknown role or ADMIN
pub async fn reset_permissions(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Settings)])
        .await?;

    let removed = RolePermissionService::new(&state.db).reset(&role).await?;

    Ok((StatusCode::OK, Json(json!({ "removed": removed }))))
}
