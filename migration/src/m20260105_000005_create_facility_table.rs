use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(pk_auto(Facility::Id))
                    .col(string(Facility::Name))
                    .col(string(Facility::Kind))
                    .col(integer(Facility::Capacity).default(1))
                    .col(big_integer(Facility::HourlyRate).default(0))
                    .col(boolean(Facility::Active).default(true))
                    .col(text_null(Facility::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Facility {
    Table,
    Id,
    Name,
    Kind,
    Capacity,
    HourlyRate,
    Active,
    Description,
}
