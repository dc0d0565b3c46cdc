use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_coach_table::Coach;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::ProductType))
                    .col(big_integer(Product::Price))
                    .col(integer_null(Product::ValidDays))
                    .col(integer_null(Product::UsageCount))
                    .col(integer_null(Product::CoachId))
                    .col(boolean(Product::Active).default(true))
                    .col(text_null(Product::Description))
                    .col(
                        timestamp(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_coach_id")
                            .from(Product::Table, Product::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    ProductType,
    Price,
    ValidDays,
    UsageCount,
    CoachId,
    Active,
    Description,
    CreatedAt,
}
