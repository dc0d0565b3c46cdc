//! Per-role permission matrix.
//!
//! Stored rows override the built-in defaults area by area. ADMIN is not
//! configurable and always holds every flag.

use entity::{role_permission::Area, user::Role};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::role_permission::RolePermissionRepository,
    error::AppError,
    model::permission::{all_areas, default_flags, AreaPermission, PermissionFlags},
};

pub struct RolePermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RolePermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One row per area: the stored override or the role's default.
    ///
    /// Unknown role names yield an all-false matrix.
    pub async fn matrix(&self, role: &str) -> Result<Vec<AreaPermission>, AppError> {
        let role = role.trim().to_uppercase();
        let overrides = RolePermissionRepository::new(self.db)
            .find_by_role(&role)
            .await?;

        let matrix = all_areas()
            .into_iter()
            .map(|area| match overrides.iter().find(|(a, _)| *a == area) {
                Some((_, flags)) => AreaPermission {
                    area,
                    flags: *flags,
                    overridden: true,
                },
                None => AreaPermission {
                    area,
                    flags: default_flags(&role, area),
                    overridden: false,
                },
            })
            .collect();

        Ok(matrix)
    }

    /// Effective flags of `role` for one area.
    pub async fn flags(&self, role: Role, area: Area) -> Result<PermissionFlags, AppError> {
        if role == Role::Admin {
            return Ok(PermissionFlags::ALL);
        }

        let role = role.to_value();
        let stored = RolePermissionRepository::new(self.db)
            .find(&role, area)
            .await?;

        Ok(stored.unwrap_or_else(|| default_flags(&role, area)))
    }

    /// Stores an override for one area.
    ///
    /// # Returns
    /// - `Ok(AreaPermission)` - The stored row
    /// - `Err(AppError::BadRequest)` - Unknown role or ADMIN
    pub async fn update(
        &self,
        role: &str,
        area: Area,
        flags: PermissionFlags,
    ) -> Result<AreaPermission, AppError> {
        let role = configurable_role(role)?;

        RolePermissionRepository::new(self.db)
            .upsert(&role, area, flags)
            .await?;

        tracing::info!(role, area = %area.to_value(), ?flags, "Permission override stored");

        Ok(AreaPermission {
            area,
            flags,
            overridden: true,
        })
    }

    /// Drops every override of a role, restoring its defaults.
    pub async fn reset(&self, role: &str) -> Result<u64, AppError> {
        let role = configurable_role(role)?;

        let removed = RolePermissionRepository::new(self.db)
            .delete_by_role(&role)
            .await?;

        tracing::info!(role, removed, "Permission overrides reset");

        Ok(removed)
    }
}

fn configurable_role(role: &str) -> Result<String, AppError> {
    let role = role.trim().to_uppercase();

    match Role::try_from_value(&role) {
        Ok(Role::Admin) => Err(AppError::BadRequest(
            "ADMIN permissions cannot be changed".to_string(),
        )),
        Ok(_) => Ok(role),
        Err(_) => Err(AppError::BadRequest(format!("Unknown role: {}", role))),
    }
}
