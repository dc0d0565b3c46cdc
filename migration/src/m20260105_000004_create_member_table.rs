use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_coach_table::Coach;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_uniq(Member::MemberNumber))
                    .col(integer_uniq(Member::RegistrationSeq))
                    .col(string(Member::Name))
                    .col(string_uniq(Member::Phone))
                    .col(date_null(Member::BirthDate))
                    .col(string_null(Member::Gender))
                    .col(double_null(Member::HeightCm))
                    .col(double_null(Member::WeightKg))
                    .col(string_null(Member::BattingHand))
                    .col(string_null(Member::ThrowingHand))
                    .col(string_null(Member::Position))
                    .col(string_null(Member::School))
                    .col(string_null(Member::GuardianPhone))
                    .col(string(Member::Grade))
                    .col(string(Member::Status))
                    .col(integer_null(Member::CoachId))
                    .col(text_null(Member::Memo))
                    .col(date(Member::JoinedOn))
                    .col(
                        timestamp(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Member::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_coach_id")
                            .from(Member::Table, Member::CoachId)
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
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    MemberNumber,
    RegistrationSeq,
    Name,
    Phone,
    BirthDate,
    Gender,
    HeightCm,
    WeightKg,
    BattingHand,
    ThrowingHand,
    Position,
    School,
    GuardianPhone,
    Grade,
    Status,
    CoachId,
    Memo,
    JoinedOn,
    CreatedAt,
    UpdatedAt,
}
