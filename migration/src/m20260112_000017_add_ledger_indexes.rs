use sea_orm_migration::prelude::*;

use super::{
    m20260106_000008_create_member_product_table::MemberProduct,
    m20260106_000009_create_booking_table::Booking,
    m20260106_000010_create_attendance_table::Attendance,
    m20260106_000012_create_member_product_history_table::MemberProductHistory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_member_product_member_status")
                    .table(MemberProduct::Table)
                    .col(MemberProduct::MemberId)
                    .col(MemberProduct::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_member_product_history_member_product_id")
                    .table(MemberProductHistory::Table)
                    .col(MemberProductHistory::MemberProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_booking_facility_date")
                    .table(Booking::Table)
                    .col(Booking::FacilityId)
                    .col(Booking::BookingDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_member_date")
                    .table(Attendance::Table)
                    .col(Attendance::MemberId)
                    .col(Attendance::AttendanceDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_member_date")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_facility_date")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_product_history_member_product_id")
                    .table(MemberProductHistory::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_product_member_status")
                    .table(MemberProduct::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
