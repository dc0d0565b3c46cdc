use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::member::{CreateMemberDto, MemberSearchQuery, UpdateMemberDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            member::{CreateMemberParams, MemberSearchParams, UpdateMemberParams},
        },
        service::member::MemberService,
        state::AppState,
    },
};

/// POST /api/members - Register a member
///
/// The phone number is normalized to digits and must be unique. The member
/// number is derived from the registration sequence and the phone number.
///
/// # Authentication
/// Requires CREATE on MEMBER
///
/// # Returns
/// - `201 Created`: JSON MemberDto
/// - `400 Bad Request`: Validation failure, duplicate phone or unknown coach
pub async fn create_member(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Member)])
        .await?;

    let member = MemberService::new(&state.db)
        .create(CreateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// GET /api/members - Search members
///
/// # Authentication
/// Requires VIEW on MEMBER
///
/// # Query Parameters
/// - `q`: Substring of name, phone or member number
/// - `grade`, `status`, `coach_id`: Exact filters
/// - `page`, `entries`: Zero-based paging
///
/// # Returns
/// - `200 OK`: JSON PageDto of MemberDto
pub async fn search_members(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<MemberSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Member)])
        .await?;

    let members = MemberService::new(&state.db)
        .search(MemberSearchParams::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto(|m| m.into_dto()))))
}

/// GET /api/members/{id} - Get one member
///
/// # Authentication
/// Requires VIEW on MEMBER
///
/// # Returns
/// - `200 OK`: JSON MemberDto
/// - `400 Bad Request`: Member not found
pub async fn get_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Member)])
        .await?;

    let member = MemberService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// GET /api/members/by-number/{member_number} - Look a member up by member number
///
/// # Authentication
/// Requires VIEW on MEMBER
///
/// # Returns
/// - `200 OK`: JSON MemberDto
/// - `400 Bad Request`: No member with that number
pub async fn get_member_by_number(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(member_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Member)])
        .await?;

    let member = MemberService::new(&state.db)
        .get_by_member_number(&member_number)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// GET /api/members/{id}/summary - Get a member with their usable passes
///
/// # Authentication
/// Requires VIEW on MEMBER
///
/// # Returns
/// - `200 OK`: JSON MemberSummaryDto
/// - `400 Bad Request`: Member not found
pub async fn get_member_summary(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Member)])
        .await?;

    let summary = MemberService::new(&state.db).summary(id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// PUT /api/members/{id} - Update a member
///
/// A phone change regenerates the member number with the same sequence. With
/// `backdate_only` only `joined_on` is applied.
///
/// # Authentication
/// Requires EDIT on MEMBER
///
/// # Returns
/// - `200 OK`: JSON MemberDto after the update
/// - `400 Bad Request`: Validation failure, duplicate phone, unknown member or coach
pub async fn update_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Member)])
        .await?;

    let member = MemberService::new(&state.db)
        .update(id, UpdateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// DELETE /api/members/{id} - Withdraw a member
///
/// Members are never removed; the status becomes WITHDRAWN.
///
/// # Authentication
/// Requires DELETE on MEMBER
///
/// # Returns
/// - `200 OK`: JSON MemberDto with status WITHDRAWN
/// - `400 Bad Request`: Member not found
pub async fn delete_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Member)])
        .await?;

    let member = MemberService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
