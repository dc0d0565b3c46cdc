use chrono::{DateTime, Utc};
use entity::message::{MessageChannel, MessageStatus};

use crate::model::message::{CreateMessageDto, MessageDto, MessageListQuery};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub member_id: Option<i32>,
    pub recipient_phone: String,
    pub channel: MessageChannel,
    pub content: String,
    pub status: MessageStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            recipient_phone: entity.recipient_phone,
            channel: entity.channel,
            content: entity.content,
            status: entity.status,
            sent_at: entity.sent_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            member_id: self.member_id,
            recipient_phone: self.recipient_phone,
            channel: self.channel,
            content: self.content,
            status: self.status,
            sent_at: self.sent_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub member_id: Option<i32>,
    pub recipient_phone: Option<String>,
    pub channel: MessageChannel,
    pub content: String,
}

impl CreateMessageParams {
    pub fn from_dto(dto: CreateMessageDto) -> Self {
        Self {
            member_id: dto.member_id,
            recipient_phone: dto.recipient_phone,
            channel: dto.channel,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub member_id: Option<i32>,
    pub status: Option<MessageStatus>,
}

impl MessageFilter {
    pub fn from_query(query: MessageListQuery) -> Self {
        Self {
            member_id: query.member_id,
            status: query.status,
        }
    }
}
