use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_coach_table::Coach, m20260105_000004_create_member_table::Member,
    m20260105_000007_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberProduct::Id))
                    .col(integer(MemberProduct::MemberId))
                    .col(integer(MemberProduct::ProductId))
                    .col(integer_null(MemberProduct::CoachId))
                    .col(integer_null(MemberProduct::TotalCount))
                    .col(integer_null(MemberProduct::RemainingCount))
                    .col(timestamp(MemberProduct::PurchasedAt))
                    .col(date(MemberProduct::StartsOn))
                    .col(date_null(MemberProduct::ExpiresOn))
                    .col(string(MemberProduct::Status))
                    .col(
                        timestamp(MemberProduct::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MemberProduct::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_product_member_id")
                            .from(MemberProduct::Table, MemberProduct::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_product_product_id")
                            .from(MemberProduct::Table, MemberProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_product_coach_id")
                            .from(MemberProduct::Table, MemberProduct::CoachId)
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
            .drop_table(Table::drop().table(MemberProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberProduct {
    Table,
    Id,
    MemberId,
    ProductId,
    CoachId,
    TotalCount,
    RemainingCount,
    PurchasedAt,
    StartsOn,
    ExpiresOn,
    Status,
    CreatedAt,
    UpdatedAt,
}
