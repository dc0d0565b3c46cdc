use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::coach::{Coach, CreateCoachParams, UpdateCoachParams};

/// Repository providing database operations for coaches.
pub struct CoachRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoachRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCoachParams) -> Result<Coach, DbErr> {
        let entity = entity::coach::ActiveModel {
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            specialty: ActiveValue::Set(param.specialty),
            active: ActiveValue::Set(param.active),
            memo: ActiveValue::Set(param.memo),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Coach::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Coach>, DbErr> {
        let entity = entity::prelude::Coach::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Coach::from_entity))
    }

    /// Gets coaches ordered by name, optionally only active ones.
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Coach>, DbErr> {
        let mut query = entity::prelude::Coach::find();
        if active_only {
            query = query.filter(entity::coach::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::coach::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Coach::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateCoachParams) -> Result<Option<Coach>, DbErr> {
        let Some(entity) = entity::prelude::Coach::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::coach::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(specialty) = param.specialty {
            active_model.specialty = ActiveValue::Set(Some(specialty));
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }
        if let Some(memo) = param.memo {
            active_model.memo = ActiveValue::Set(Some(memo));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Coach::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Coach::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
