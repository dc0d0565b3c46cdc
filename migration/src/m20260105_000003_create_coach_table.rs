use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coach::Table)
                    .if_not_exists()
                    .col(pk_auto(Coach::Id))
                    .col(string(Coach::Name))
                    .col(string_null(Coach::Phone))
                    .col(string_null(Coach::Specialty))
                    .col(boolean(Coach::Active).default(true))
                    .col(text_null(Coach::Memo))
                    .col(
                        timestamp(Coach::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coach::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coach {
    Table,
    Id,
    Name,
    Phone,
    Specialty,
    Active,
    Memo,
    CreatedAt,
}
