use chrono::{DateTime, Utc};
use entity::message::{MessageChannel, MessageStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i32,
    pub member_id: Option<i32>,
    pub recipient_phone: String,
    pub channel: MessageChannel,
    pub content: String,
    pub status: MessageStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Queue a message. Without `recipient_phone` the member's phone is used.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageDto {
    pub member_id: Option<i32>,
    pub recipient_phone: Option<String>,
    pub channel: MessageChannel,
    #[validate(length(min = 1, max = 2000, message = "Content is required"))]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageStatusDto {
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageListQuery {
    pub member_id: Option<i32>,
    pub status: Option<MessageStatus>,
}
