use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::notice::{
    Announcement, CreateAnnouncementParams, UpdateAnnouncementParams,
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAnnouncementParams) -> Result<Announcement, DbErr> {
        let now = Utc::now();
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            pinned: ActiveValue::Set(param.pinned),
            active: ActiveValue::Set(true),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let entity = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Announcement::from_entity))
    }

    /// Gets announcements pinned first, then newest first.
    ///
    /// # Arguments
    /// - `include_inactive` - Also return deactivated announcements
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Announcement>, DbErr> {
        let mut query = entity::prelude::Announcement::find();
        if !include_inactive {
            query = query.filter(entity::announcement::Column::Active.eq(true));
        }

        let entities = query
            .order_by_desc(entity::announcement::Column::Pinned)
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Announcement::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateAnnouncementParams,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(entity) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::announcement::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(pinned) = param.pinned {
            active_model.pinned = ActiveValue::Set(pinned);
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Announcement::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
