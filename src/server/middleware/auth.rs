use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use entity::user::Role;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{CurrentUser, Permission},
        user::User,
    },
    service::{auth::ensure_usable, role_permission::RolePermissionService},
    state::AppState,
    util::jwt::JwtService,
};

/// Rejects requests without a valid bearer token.
///
/// On success the decoded `CurrentUser` is inserted into the request extensions
/// for handlers to extract.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtService::extract_from_header)
        .ok_or(AuthError::MissingToken)?;

    let claims = state.jwt.validate(token)?;
    request.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    current: &'a CurrentUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, current: &'a CurrentUser) -> Self {
        Self { db, current }
    }

    /// Loads the caller's account and checks every permission.
    ///
    /// The account is re-read on each call so that deactivation or a role
    /// change takes effect before the token expires. Permissions are resolved
    /// from the stored role, not the role in the token.
    ///
    /// # Returns
    /// - `Ok(User)` - Account usable and all permissions granted
    /// - `Err(AuthError::UserNotFound)` - Account was deleted
    /// - `Err(AuthError::Deactivated | PendingApproval)` - Account not usable
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.current.id;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        ensure_usable(&user)?;

        if user.role != self.current.role {
            tracing::debug!(
                user_id,
                token_role = %self.current.role.to_value(),
                stored_role = %user.role.to_value(),
                "Role changed since the token was issued"
            );
        }

        let permission_service = RolePermissionService::new(self.db);
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            area: "ADMIN".to_string(),
                            action: "manage".to_string(),
                        }
                        .into());
                    }
                }
                Permission::Area(area, action) => {
                    let flags = permission_service.flags(user.role, *area).await?;
                    if !flags.allows(*action) {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            area: area.to_value(),
                            action: action.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
