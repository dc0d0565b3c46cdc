use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RolePermission::Table)
                    .if_not_exists()
                    .col(pk_auto(RolePermission::Id))
                    .col(string(RolePermission::Role))
                    .col(string(RolePermission::Area))
                    .col(boolean(RolePermission::CanView).default(false))
                    .col(boolean(RolePermission::CanCreate).default(false))
                    .col(boolean(RolePermission::CanEdit).default(false))
                    .col(boolean(RolePermission::CanDelete).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_role_permission_role_area")
                    .table(RolePermission::Table)
                    .col(RolePermission::Role)
                    .col(RolePermission::Area)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RolePermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RolePermission {
    Table,
    Id,
    Role,
    Area,
    CanView,
    CanCreate,
    CanEdit,
    CanDelete,
}
