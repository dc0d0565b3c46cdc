use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Authentication required")]
    MissingToken,

    /// Token could not be decoded or its signature is wrong.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token signature is valid but `exp` has passed.
    #[error("Token has expired")]
    ExpiredToken,

    /// Unknown username or wrong password. Both cases share one message.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Correct credentials but an administrator has not approved the account yet.
    #[error("Account is pending approval")]
    PendingApproval,

    /// Account was deactivated by an administrator.
    #[error("Account is deactivated")]
    Deactivated,

    /// Token refers to a user that no longer exists.
    #[error("User {0} not found")]
    UserNotFound(i32),

    /// Role lacks the flag required for the operation.
    #[error("User {user_id} denied {action} on {area}")]
    AccessDenied {
        user_id: i32,
        area: String,
        action: String,
    },

    /// Signing a new token failed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - missing, invalid or expired token, bad credentials, unknown user
/// - 403 Forbidden - pending approval, deactivated account, permission denied
/// - 500 Internal Server Error - token signing failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::InvalidToken(_) | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::PendingApproval | Self::Deactivated => (StatusCode::FORBIDDEN, self.to_string()),
            Self::AccessDenied { .. } => {
                (StatusCode::FORBIDDEN, "Permission denied".to_string())
            }
            Self::TokenIssue(_) => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response();
            }
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
