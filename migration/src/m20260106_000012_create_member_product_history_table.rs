use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000008_create_member_product_table::MemberProduct;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // attendance_id / payment_id / booking_id are plain references without
        // foreign keys so ledger rows survive deletion of the event they point to.
        manager
            .create_table(
                Table::create()
                    .table(MemberProductHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberProductHistory::Id))
                    .col(integer(MemberProductHistory::MemberProductId))
                    .col(integer(MemberProductHistory::MemberId))
                    .col(string(MemberProductHistory::Kind))
                    .col(integer(MemberProductHistory::ChangeAmount))
                    .col(integer_null(MemberProductHistory::RemainingAfter))
                    .col(integer_null(MemberProductHistory::AttendanceId))
                    .col(integer_null(MemberProductHistory::PaymentId))
                    .col(integer_null(MemberProductHistory::BookingId))
                    .col(string_null(MemberProductHistory::Description))
                    .col(string_null(MemberProductHistory::CreatedBy))
                    .col(
                        timestamp(MemberProductHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_product_history_member_product_id")
                            .from(
                                MemberProductHistory::Table,
                                MemberProductHistory::MemberProductId,
                            )
                            .to(MemberProduct::Table, MemberProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberProductHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberProductHistory {
    Table,
    Id,
    MemberProductId,
    MemberId,
    Kind,
    ChangeAmount,
    RemainingAfter,
    AttendanceId,
    PaymentId,
    BookingId,
    Description,
    CreatedBy,
    CreatedAt,
}
