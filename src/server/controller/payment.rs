use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::{
        api::{DateRangeQuery, ErrorDto},
        payment::{CreatePaymentDto, PaymentDto, PaymentListQuery, PaymentSummaryDto, RefundDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            payment::{CreatePaymentParams, PaymentFilter, RefundParams},
        },
        service::payment::PaymentService,
        state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Record a payment. A COMPLETED payment with a member and product issues a pass.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Non-positive amount, unknown member or product", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_payment(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Payment)])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create(
            CreatePaymentParams::from_dto(payload, &state.defaults, Some(current.username.clone())),
            &state.defaults,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(
        ("member_id" = Option<i32>, Query, description = "Member filter"),
        ("from" = Option<String>, Query, description = "First payment date (inclusive)"),
        ("to" = Option<String>, Query, description = "Last payment date (inclusive)"),
        ("status" = Option<String>, Query, description = "Status filter")
    ),
    responses(
        (status = 200, description = "Payments, newest first", body = [PaymentDto])
    ),
    security(("bearer" = []))
)]
pub async fn list_payments(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Payment)])
        .await?;

    let payments = PaymentService::new(&state.db)
        .list(PaymentFilter::from_query(query))
        .await?;
    let payments_dto: Vec<_> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(payments_dto)))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment found", body = PaymentDto),
        (status = 400, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_payment(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Payment)])
        .await?;

    let payment = PaymentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Refund part or all of a payment, optionally revoking sessions from its pass.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/refund",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = RefundDto,
    responses(
        (status = 200, description = "Payment refunded", body = PaymentDto),
        (status = 400, description = "Wrong status or amount above the refundable balance", body = ErrorDto),
        (status = 409, description = "Pass balance changed concurrently; retry", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn refund_payment(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<RefundDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Payment)])
        .await?;

    let payment = PaymentService::new(&state.db)
        .refund(id, RefundParams::from_dto(payload, Some(current.username.clone())))
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Cancel a PENDING payment.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/cancel",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment cancelled", body = PaymentDto),
        (status = 400, description = "Payment is not PENDING", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn cancel_payment(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Payment)])
        .await?;

    let payment = PaymentService::new(&state.db).cancel(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Paid, refunded and net totals over a date range.
#[utoipa::path(
    get,
    path = "/api/payments/summary",
    tag = PAYMENT_TAG,
    params(
        ("from" = Option<String>, Query, description = "First payment date (inclusive)"),
        ("to" = Option<String>, Query, description = "Last payment date (inclusive)")
    ),
    responses(
        (status = 200, description = "Revenue summary", body = PaymentSummaryDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_payment_summary(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Payment)])
        .await?;

    let summary = PaymentService::new(&state.db)
        .summary(range.from, range.to)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
