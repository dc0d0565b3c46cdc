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
                    .table(BaseballRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(BaseballRecord::Id))
                    .col(integer(BaseballRecord::MemberId))
                    .col(date(BaseballRecord::RecordDate))
                    .col(integer(BaseballRecord::PlateAppearances).default(0))
                    .col(integer(BaseballRecord::AtBats).default(0))
                    .col(integer(BaseballRecord::Hits).default(0))
                    .col(integer(BaseballRecord::Doubles).default(0))
                    .col(integer(BaseballRecord::Triples).default(0))
                    .col(integer(BaseballRecord::HomeRuns).default(0))
                    .col(integer(BaseballRecord::RunsBattedIn).default(0))
                    .col(integer(BaseballRecord::Walks).default(0))
                    .col(integer(BaseballRecord::Strikeouts).default(0))
                    .col(integer(BaseballRecord::StolenBases).default(0))
                    .col(text_null(BaseballRecord::Memo))
                    .col(
                        timestamp(BaseballRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_baseball_record_member_id")
                            .from(BaseballRecord::Table, BaseballRecord::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BaseballRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BaseballRecord {
    Table,
    Id,
    MemberId,
    RecordDate,
    PlateAppearances,
    AtBats,
    Hits,
    Doubles,
    Triples,
    HomeRuns,
    RunsBattedIn,
    Walks,
    Strikeouts,
    StolenBases,
    Memo,
    CreatedAt,
}
