use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::training::{
    BaseballRecord, BattingLine, CreateBaseballRecordParams, UpdateBaseballRecordParams,
};

pub struct BaseballRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BaseballRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateBaseballRecordParams) -> Result<BaseballRecord, DbErr> {
        let mut active_model = entity::baseball_record::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            record_date: ActiveValue::Set(param.record_date),
            memo: ActiveValue::Set(param.memo),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        set_line(&mut active_model, param.line);

        let entity = active_model.insert(self.db).await?;

        Ok(BaseballRecord::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BaseballRecord>, DbErr> {
        let entity = entity::prelude::BaseballRecord::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BaseballRecord::from_entity))
    }

    /// Gets a member's records ordered by game date.
    ///
    /// # Arguments
    /// - `member_id` - Player
    /// - `range` - Optional inclusive `(from, to)` date range
    pub async fn find_by_member(
        &self,
        member_id: i32,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<BaseballRecord>, DbErr> {
        let mut query = entity::prelude::BaseballRecord::find()
            .filter(entity::baseball_record::Column::MemberId.eq(member_id));
        if let Some((from, to)) = range {
            query = query
                .filter(entity::baseball_record::Column::RecordDate.gte(from))
                .filter(entity::baseball_record::Column::RecordDate.lte(to));
        }

        let entities = query
            .order_by_asc(entity::baseball_record::Column::RecordDate)
            .order_by_asc(entity::baseball_record::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BaseballRecord::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateBaseballRecordParams,
    ) -> Result<Option<BaseballRecord>, DbErr> {
        let Some(entity) = entity::prelude::BaseballRecord::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::baseball_record::ActiveModel = entity.into();
        if let Some(record_date) = param.record_date {
            active_model.record_date = ActiveValue::Set(record_date);
        }
        if let Some(line) = param.line {
            set_line(&mut active_model, line);
        }
        if let Some(memo) = param.memo {
            active_model.memo = ActiveValue::Set(Some(memo));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(BaseballRecord::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BaseballRecord::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn set_line(active_model: &mut entity::baseball_record::ActiveModel, line: BattingLine) {
    active_model.plate_appearances = ActiveValue::Set(line.plate_appearances);
    active_model.at_bats = ActiveValue::Set(line.at_bats);
    active_model.hits = ActiveValue::Set(line.hits);
    active_model.doubles = ActiveValue::Set(line.doubles);
    active_model.triples = ActiveValue::Set(line.triples);
    active_model.home_runs = ActiveValue::Set(line.home_runs);
    active_model.runs_batted_in = ActiveValue::Set(line.runs_batted_in);
    active_model.walks = ActiveValue::Set(line.walks);
    active_model.strikeouts = ActiveValue::Set(line.strikeouts);
    active_model.stolen_bases = ActiveValue::Set(line.stolen_bases);
}
