//! Authenticated principal and permission requirements.

use entity::{role_permission::Area, user::Role};

use crate::server::util::jwt::Claims;

/// The caller identified by a validated access token.
///
/// Inserted into request extensions by `require_auth`. Account state is
/// re-checked against the database by `AuthGuard` on every guarded request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Operation kind gated by the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A single requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy)]
pub enum Permission {
    Admin,
    Area(Area, Action),
}

impl Permission {
    pub fn view(area: Area) -> Self {
        Self::Area(area, Action::View)
    }

    pub fn create(area: Area) -> Self {
        Self::Area(area, Action::Create)
    }

    pub fn edit(area: Area) -> Self {
        Self::Area(area, Action::Edit)
    }

    pub fn delete(area: Area) -> Self {
        Self::Area(area, Action::Delete)
    }
}
