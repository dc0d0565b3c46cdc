//! Stored role permission overrides.

use entity::role_permission::Area;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::permission::PermissionFlags;

pub struct RolePermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RolePermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every override stored for a role.
    pub async fn find_by_role(&self, role: &str) -> Result<Vec<(Area, PermissionFlags)>, DbErr> {
        let entities = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::Role.eq(role))
            .all(self.db)
            .await?;

        Ok(entities
            .iter()
            .map(|e| (e.area, PermissionFlags::from_entity(e)))
            .collect())
    }

    pub async fn find(&self, role: &str, area: Area) -> Result<Option<PermissionFlags>, DbErr> {
        let entity = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::Role.eq(role))
            .filter(entity::role_permission::Column::Area.eq(area))
            .one(self.db)
            .await?;

        Ok(entity.as_ref().map(PermissionFlags::from_entity))
    }

    /// Inserts or replaces the override for `(role, area)`.
    pub async fn upsert(
        &self,
        role: &str,
        area: Area,
        flags: PermissionFlags,
    ) -> Result<PermissionFlags, DbErr> {
        let existing = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::Role.eq(role))
            .filter(entity::role_permission::Column::Area.eq(area))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => {
                let mut active_model: entity::role_permission::ActiveModel = entity.into();
                active_model.can_view = ActiveValue::Set(flags.can_view);
                active_model.can_create = ActiveValue::Set(flags.can_create);
                active_model.can_edit = ActiveValue::Set(flags.can_edit);
                active_model.can_delete = ActiveValue::Set(flags.can_delete);
                active_model.update(self.db).await?
            }
            None => {
                entity::role_permission::ActiveModel {
                    role: ActiveValue::Set(role.to_string()),
                    area: ActiveValue::Set(area),
                    can_view: ActiveValue::Set(flags.can_view),
                    can_create: ActiveValue::Set(flags.can_create),
                    can_edit: ActiveValue::Set(flags.can_edit),
                    can_delete: ActiveValue::Set(flags.can_delete),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(PermissionFlags::from_entity(&entity))
    }

    /// Drops every override of a role. Returns the number of rows deleted.
    pub async fn delete_by_role(&self, role: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::RolePermission::delete_many()
            .filter(entity::role_permission::Column::Role.eq(role))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
