use chrono::Utc;
use entity::message::{MessageChannel, MessageStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::message::{Message, MessageFilter};

/// Repository for recorded outbound messages. Nothing here delivers them.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a PENDING message.
    pub async fn create(
        &self,
        member_id: Option<i32>,
        recipient_phone: String,
        channel: MessageChannel,
        content: String,
    ) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            recipient_phone: ActiveValue::Set(recipient_phone),
            channel: ActiveValue::Set(channel),
            content: ActiveValue::Set(content),
            status: ActiveValue::Set(MessageStatus::Pending),
            sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Message::from_entity))
    }

    pub async fn list(&self, filter: &MessageFilter) -> Result<Vec<Message>, DbErr> {
        let mut query = entity::prelude::Message::find();
        if let Some(member_id) = filter.member_id {
            query = query.filter(entity::message::Column::MemberId.eq(member_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::message::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Sets the delivery status; `sent_at` is stamped when the status is SENT.
    pub async fn set_status(
        &self,
        id: i32,
        status: MessageStatus,
    ) -> Result<Option<Message>, DbErr> {
        let Some(entity) = entity::prelude::Message::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::message::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status);
        if status == MessageStatus::Sent {
            active_model.sent_at = ActiveValue::Set(Some(Utc::now()));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Message::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
