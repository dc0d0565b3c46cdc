use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_coach_table::Coach, m20260105_000004_create_member_table::Member,
    m20260105_000005_create_facility_table::Facility,
    m20260106_000008_create_member_product_table::MemberProduct,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::FacilityId))
                    .col(integer_null(Booking::MemberId))
                    .col(integer_null(Booking::CoachId))
                    .col(integer_null(Booking::MemberProductId))
                    .col(string(Booking::Purpose))
                    .col(string(Booking::Status))
                    .col(date(Booking::BookingDate))
                    .col(time(Booking::StartTime))
                    .col(time(Booking::EndTime))
                    .col(integer(Booking::Participants).default(1))
                    .col(boolean(Booking::ProductDeducted).default(false))
                    .col(text_null(Booking::Memo))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_facility_id")
                            .from(Booking::Table, Booking::FacilityId)
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_member_id")
                            .from(Booking::Table, Booking::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_coach_id")
                            .from(Booking::Table, Booking::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_member_product_id")
                            .from(Booking::Table, Booking::MemberProductId)
                            .to(MemberProduct::Table, MemberProduct::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    FacilityId,
    MemberId,
    CoachId,
    MemberProductId,
    Purpose,
    Status,
    BookingDate,
    StartTime,
    EndTime,
    Participants,
    ProductDeducted,
    Memo,
    CreatedAt,
    UpdatedAt,
}
