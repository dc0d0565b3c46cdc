use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_facility_table::Facility;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FacilitySlot::Table)
                    .if_not_exists()
                    .col(pk_auto(FacilitySlot::Id))
                    .col(integer(FacilitySlot::FacilityId))
                    // Older deployments wrote day names here, so this stays a string column
                    .col(string(FacilitySlot::DayOfWeek))
                    .col(time(FacilitySlot::OpenTime))
                    .col(time(FacilitySlot::CloseTime))
                    .col(boolean(FacilitySlot::IsOpen).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_facility_slot_facility_id")
                            .from(FacilitySlot::Table, FacilitySlot::FacilityId)
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacilitySlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FacilitySlot {
    Table,
    Id,
    FacilityId,
    DayOfWeek,
    OpenTime,
    CloseTime,
    IsOpen,
}
