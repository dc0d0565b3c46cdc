use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::{
        InitAdminDto, LoginDto, LoginResponseDto, PrincipalDto, RegisterDto, ValidateTokenDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::auth::CurrentUser,
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/login - Exchange credentials for an access token
///
/// # Authentication
/// Public endpoint
///
/// # Returns
/// - `200 OK`: JSON LoginResponseDto with the bearer token and account
/// - `401 Unauthorized`: Unknown username or wrong password
/// - `403 Forbidden`: Account pending approval or deactivated
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt);
    let (token, user) = auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// POST /api/auth/register - Create an account awaiting administrator approval
///
/// # Authentication
/// Public endpoint
///
/// # Returns
/// - `201 Created`: JSON UserDto with `approved = false`
/// - `400 Bad Request`: Validation failure or username already taken
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt);
    let user = auth_service
        .register(
            &payload.username,
            &payload.password,
            &payload.name,
            payload.role,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/init-admin - Create the first administrator
///
/// Only succeeds while no ADMIN account exists.
///
/// # Authentication
/// Public endpoint
///
/// # Returns
/// - `201 Created`: JSON UserDto of the new administrator
/// - `400 Bad Request`: An administrator already exists
pub async fn init_admin(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<InitAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt);
    let user = auth_service
        .init_admin(&payload.username, &payload.password, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/validate - Check a token and the account it names
///
/// # Authentication
/// Public endpoint
///
/// # Returns
/// - `200 OK`: JSON UserDto of the token's account
/// - `401 Unauthorized`: Invalid or expired token
/// - `403 Forbidden`: Account pending approval or deactivated
pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt);
    let user = auth_service.validate(&payload.token).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/me - Get the current account and its permission matrix
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON PrincipalDto
/// - `401 Unauthorized`: Missing or invalid token
pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current).require(&[]).await?;

    let auth_service = AuthService::new(&state.db, &state.jwt);
    let (user, permissions) = auth_service.me(current.id).await?;

    Ok((
        StatusCode::OK,
        Json(PrincipalDto {
            user: user.into_dto(),
            permissions: permissions.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}
