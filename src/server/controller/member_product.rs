use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use entity::role_permission::Area;

use crate::{
    model::{
        api::ErrorDto,
        member_product::{
            AdjustDto, CreditDto, DeductDto, ExpireResultDto, HistoryDto, LedgerCheckDto,
            LedgerWriteDto, MemberProductDto, MemberProductListQuery, PurchaseDto, RemainingDto,
            UpdateMemberProductDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            member_product::{
                ledger_write_dto, LedgerChange, PurchaseParams, UpdateMemberProductParams,
            },
        },
        service::member_product::MemberProductService,
        state::AppState,
    },
};

pub static MEMBER_PRODUCT_TAG: &str = "member_product";

/// Issue a pass to a member and write its CHARGE entry.
#[utoipa::path(
    post,
    path = "/api/member-products",
    tag = MEMBER_PRODUCT_TAG,
    request_body = PurchaseDto,
    responses(
        (status = 201, description = "Pass issued", body = MemberProductDto),
        (status = 400, description = "Unknown member or product, withdrawn member or inactive product", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn purchase(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<PurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::MemberProduct)])
        .await?;

    let pass = MemberProductService::new(&state.db)
        .purchase(
            PurchaseParams::from_dto(payload, Some(current.username.clone())),
            &state.defaults,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(pass.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/member-products/{id}",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Pass found", body = MemberProductDto),
        (status = 400, description = "Pass not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_member_product(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::MemberProduct)])
        .await?;

    let pass = MemberProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(pass.into_dto())))
}

/// Passes of one member, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/members/{id}/passes",
    tag = MEMBER_PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Member ID"),
        ("status" = Option<String>, Query, description = "ACTIVE, USED_UP or EXPIRED")
    ),
    responses(
        (status = 200, description = "Passes of the member", body = [MemberProductDto]),
        (status = 400, description = "Member not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_member_passes(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(member_id): Path<i32>,
    Query(query): Query<MemberProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::MemberProduct)])
        .await?;

    let passes = MemberProductService::new(&state.db)
        .list_by_member(member_id, query.status)
        .await?;
    let passes_dto: Vec<_> = passes.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(passes_dto)))
}

/// Change the coach override or the expiry date of a pass.
#[utoipa::path(
    put,
    path = "/api/member-products/{id}",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    request_body = UpdateMemberProductDto,
    responses(
        (status = 200, description = "Pass updated", body = MemberProductDto),
        (status = 400, description = "Pass or coach not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_member_product(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMemberProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::MemberProduct)])
        .await?;

    let pass = MemberProductService::new(&state.db)
        .update(id, UpdateMemberProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(pass.into_dto())))
}

/// Consume sessions from a pass.
#[utoipa::path(
    post,
    path = "/api/member-products/{id}/deduct",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    request_body = DeductDto,
    responses(
        (status = 200, description = "Sessions deducted", body = LedgerWriteDto),
        (status = 400, description = "Pass not active, expired or insufficient balance", body = ErrorDto),
        (status = 409, description = "Balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn deduct(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<DeductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::MemberProduct)])
        .await?;

    let write = MemberProductService::new(&state.db)
        .deduct(id, LedgerChange::from_deduct_dto(payload, Some(current.username.clone())))
        .await?;

    Ok((StatusCode::OK, Json(ledger_write_dto(write))))
}

/// Restore sessions to a pass, never above its total.
#[utoipa::path(
    post,
    path = "/api/member-products/{id}/credit",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    request_body = CreditDto,
    responses(
        (status = 200, description = "Sessions restored", body = LedgerWriteDto),
        (status = 400, description = "Pass not found or has no session count", body = ErrorDto),
        (status = 409, description = "Balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn credit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<CreditDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::MemberProduct)])
        .await?;

    let write = MemberProductService::new(&state.db)
        .credit(id, LedgerChange::from_credit_dto(payload, Some(current.username.clone())))
        .await?;

    Ok((StatusCode::OK, Json(ledger_write_dto(write))))
}

/// Set the remaining count of a pass by hand.
#[utoipa::path(
    post,
    path = "/api/member-products/{id}/adjust",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    request_body = AdjustDto,
    responses(
        (status = 200, description = "Balance adjusted", body = LedgerWriteDto),
        (status = 400, description = "Value outside [0, total] or uncounted pass", body = ErrorDto),
        (status = 409, description = "Balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn adjust(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<AdjustDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::MemberProduct)])
        .await?;

    let change = LedgerChange::from_adjust_dto(&payload, Some(current.username.clone()));
    let write = MemberProductService::new(&state.db)
        .adjust(id, payload.remaining_count, change)
        .await?;

    Ok((StatusCode::OK, Json(ledger_write_dto(write))))
}

#[utoipa::path(
    get,
    path = "/api/member-products/{id}/history",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Ledger entries, oldest first", body = [HistoryDto]),
        (status = 400, description = "Pass not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_history(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::MemberProduct)])
        .await?;

    let entries = MemberProductService::new(&state.db).history(id).await?;
    let entries_dto: Vec<_> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}

/// Remaining count read directly from storage.
#[utoipa::path(
    get,
    path = "/api/member-products/{id}/remaining",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Current remaining count", body = RemainingDto),
        (status = 400, description = "Pass not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_remaining(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::MemberProduct)])
        .await?;

    let remaining_count = MemberProductService::new(&state.db)
        .fresh_remaining(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RemainingDto {
            member_product_id: id,
            remaining_count,
        }),
    ))
}

/// Compare the ledger sum with the stored balance.
#[utoipa::path(
    get,
    path = "/api/member-products/{id}/verify",
    tag = MEMBER_PRODUCT_TAG,
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Ledger check result", body = LedgerCheckDto),
        (status = 400, description = "Pass not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn verify(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::MemberProduct)])
        .await?;

    let check = MemberProductService::new(&state.db).verify(id).await?;

    Ok((StatusCode::OK, Json(check.into_dto())))
}

/// Expire every ACTIVE pass past its expiry date. Also runs nightly.
#[utoipa::path(
    post,
    path = "/api/member-products/expire",
    tag = MEMBER_PRODUCT_TAG,
    responses(
        (status = 200, description = "Number of passes expired", body = ExpireResultDto),
        (status = 403, description = "Permission denied", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn expire_overdue(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::Admin])
        .await?;

    let expired = MemberProductService::new(&state.db)
        .expire_overdue(Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(ExpireResultDto { expired })))
}
