use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_member_table::Member, m20260106_000009_create_booking_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::MemberId))
                    .col(integer_null(Attendance::BookingId))
                    .col(integer_null(Attendance::MemberProductId))
                    .col(date(Attendance::AttendanceDate))
                    .col(timestamp(Attendance::CheckInAt))
                    .col(timestamp_null(Attendance::CheckOutAt))
                    .col(text_null(Attendance::Memo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_member_id")
                            .from(Attendance::Table, Attendance::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_booking_id")
                            .from(Attendance::Table, Attendance::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    MemberId,
    BookingId,
    MemberProductId,
    AttendanceDate,
    CheckInAt,
    CheckOutAt,
    Memo,
}
