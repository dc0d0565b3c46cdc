use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer_null(Payment::MemberId))
                    .col(integer_null(Payment::BookingId))
                    .col(integer_null(Payment::ProductId))
                    .col(integer_null(Payment::MemberProductId))
                    .col(big_integer(Payment::Amount))
                    .col(big_integer(Payment::RefundedAmount).default(0))
                    .col(string(Payment::Method))
                    .col(string(Payment::Status))
                    .col(string(Payment::Category))
                    .col(timestamp(Payment::PaidAt))
                    .col(string_null(Payment::RefundReason))
                    .col(string_null(Payment::RefundApprovedBy))
                    .col(timestamp_null(Payment::RefundedAt))
                    .col(text_null(Payment::Memo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_member_id")
                            .from(Payment::Table, Payment::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    MemberId,
    BookingId,
    ProductId,
    MemberProductId,
    Amount,
    RefundedAmount,
    Method,
    Status,
    Category,
    PaidAt,
    RefundReason,
    RefundApprovedBy,
    RefundedAt,
    Memo,
}
