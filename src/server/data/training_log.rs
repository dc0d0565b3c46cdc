use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::training::{TrainingLog, UpdateTrainingLogParams};

pub struct TrainingLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        member_id: i32,
        coach_id: Option<i32>,
        training_date: NaiveDate,
        content: String,
        duration_minutes: Option<i32>,
    ) -> Result<TrainingLog, DbErr> {
        let entity = entity::training_log::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            coach_id: ActiveValue::Set(coach_id),
            training_date: ActiveValue::Set(training_date),
            content: ActiveValue::Set(content),
            duration_minutes: ActiveValue::Set(duration_minutes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TrainingLog::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrainingLog>, DbErr> {
        let entity = entity::prelude::TrainingLog::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TrainingLog::from_entity))
    }

    /// Gets a member's logs, most recent training first.
    pub async fn find_by_member(&self, member_id: i32) -> Result<Vec<TrainingLog>, DbErr> {
        let entities = entity::prelude::TrainingLog::find()
            .filter(entity::training_log::Column::MemberId.eq(member_id))
            .order_by_desc(entity::training_log::Column::TrainingDate)
            .order_by_desc(entity::training_log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TrainingLog::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateTrainingLogParams,
    ) -> Result<Option<TrainingLog>, DbErr> {
        let Some(entity) = entity::prelude::TrainingLog::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::training_log::ActiveModel = entity.into();
        if let Some(coach_id) = param.coach_id {
            active_model.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(training_date) = param.training_date {
            active_model.training_date = ActiveValue::Set(training_date);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(duration_minutes) = param.duration_minutes {
            active_model.duration_minutes = ActiveValue::Set(Some(duration_minutes));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(TrainingLog::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TrainingLog::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
