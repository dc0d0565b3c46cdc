//! Training logs and per-game batting records.

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        baseball_record::BaseballRecordRepository, coach::CoachRepository,
        member::MemberRepository, training_log::TrainingLogRepository,
    },
    error::AppError,
    model::training::{
        BaseballRecord, CreateBaseballRecordParams, CreateTrainingLogParams, SeasonTotal,
        TrainingLog, UpdateBaseballRecordParams, UpdateTrainingLogParams,
    },
};

pub struct TrainingLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTrainingLogParams) -> Result<TrainingLog, AppError> {
        ensure_member(self.db, param.member_id).await?;
        if let Some(coach_id) = param.coach_id {
            ensure_coach(self.db, coach_id).await?;
        }

        let log = TrainingLogRepository::new(self.db)
            .create(
                param.member_id,
                param.coach_id,
                param.training_date.unwrap_or_else(|| Utc::now().date_naive()),
                param.content,
                param.duration_minutes,
            )
            .await?;

        Ok(log)
    }

    pub async fn get(&self, id: i32) -> Result<TrainingLog, AppError> {
        TrainingLogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Training log", id))
    }

    /// A member's logs, newest first.
    pub async fn list_by_member(&self, member_id: i32) -> Result<Vec<TrainingLog>, AppError> {
        ensure_member(self.db, member_id).await?;

        Ok(TrainingLogRepository::new(self.db)
            .find_by_member(member_id)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateTrainingLogParams,
    ) -> Result<TrainingLog, AppError> {
        if let Some(Some(coach_id)) = param.coach_id {
            ensure_coach(self.db, coach_id).await?;
        }

        TrainingLogRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Training log", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if TrainingLogRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::not_found("Training log", id));
        }

        Ok(())
    }
}

pub struct BaseballRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BaseballRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateBaseballRecordParams,
    ) -> Result<BaseballRecord, AppError> {
        ensure_member(self.db, param.member_id).await?;
        validate_line_counts(param.line.at_bats, param.line.plate_appearances)?;

        Ok(BaseballRecordRepository::new(self.db).create(param).await?)
    }

    pub async fn get(&self, id: i32) -> Result<BaseballRecord, AppError> {
        BaseballRecordRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Baseball record", id))
    }

    pub async fn list_by_member(&self, member_id: i32) -> Result<Vec<BaseballRecord>, AppError> {
        ensure_member(self.db, member_id).await?;

        Ok(BaseballRecordRepository::new(self.db)
            .find_by_member(member_id, None)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateBaseballRecordParams,
    ) -> Result<BaseballRecord, AppError> {
        if let Some(line) = &param.line {
            validate_line_counts(line.at_bats, line.plate_appearances)?;
        }

        BaseballRecordRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Baseball record", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if BaseballRecordRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::not_found("Baseball record", id));
        }

        Ok(())
    }

    /// Sum of a member's batting lines over one calendar year.
    pub async fn season_total(&self, member_id: i32, year: i32) -> Result<SeasonTotal, AppError> {
        ensure_member(self.db, member_id).await?;

        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Err(AppError::BadRequest(format!("Invalid season year: {}", year)));
        };

        let records = BaseballRecordRepository::new(self.db)
            .find_by_member(member_id, Some((first, last)))
            .await?;

        Ok(SeasonTotal::from_records(member_id, year, &records))
    }
}

fn validate_line_counts(at_bats: i32, plate_appearances: i32) -> Result<(), AppError> {
    if at_bats > plate_appearances {
        return Err(AppError::BadRequest(
            "At-bats cannot exceed plate appearances".to_string(),
        ));
    }

    Ok(())
}

async fn ensure_member(db: &DatabaseConnection, member_id: i32) -> Result<(), AppError> {
    MemberRepository::new(db)
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::not_found("Member", member_id))?;

    Ok(())
}

async fn ensure_coach(db: &DatabaseConnection, coach_id: i32) -> Result<(), AppError> {
    CoachRepository::new(db)
        .find_by_id(coach_id)
        .await?
        .ok_or_else(|| AppError::not_found("Coach", coach_id))?;

    Ok(())
}
