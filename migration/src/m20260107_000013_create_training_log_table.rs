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
                    .table(TrainingLog::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingLog::Id))
                    .col(integer(TrainingLog::MemberId))
                    .col(integer_null(TrainingLog::CoachId))
                    .col(date(TrainingLog::TrainingDate))
                    .col(text(TrainingLog::Content))
                    .col(integer_null(TrainingLog::DurationMinutes))
                    .col(
                        timestamp(TrainingLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_log_member_id")
                            .from(TrainingLog::Table, TrainingLog::MemberId)
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
            .drop_table(Table::drop().table(TrainingLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingLog {
    Table,
    Id,
    MemberId,
    CoachId,
    TrainingDate,
    Content,
    DurationMinutes,
    CreatedAt,
}
