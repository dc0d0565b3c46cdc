use entity::{role_permission::Area, user::Role};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{
        auth::{CurrentUser, Permission},
        permission::PermissionFlags,
    },
    service::role_permission::RolePermissionService,
};

mod require;

fn current(id: i32, role: Role) -> CurrentUser {
    CurrentUser {
        id,
        username: format!("user{}", id),
        role,
    }
}
