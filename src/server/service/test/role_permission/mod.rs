use crate::server::{
    error::AppError,
    model::permission::{all_areas, PermissionFlags},
    service::role_permission::RolePermissionService,
};
use entity::{role_permission::Area, user::Role};
use test_utils::builder::TestBuilder;

mod matrix;
mod update;
