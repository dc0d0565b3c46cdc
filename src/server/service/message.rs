//! Outgoing member messages.
//!
//! Messages are only recorded. Delivery happens outside this service, which
//! reports back through `mark`.

use entity::message::MessageStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{member::MemberRepository, message::MessageRepository},
    error::AppError,
    model::message::{CreateMessageParams, Message, MessageFilter},
    util::phone::normalize_phone,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a PENDING message.
    ///
    /// The recipient defaults to the member's phone number.
    ///
    /// # Returns
    /// - `Ok(Message)` - The recorded message
    /// - `Err(AppError::NotFound)` - Member does not exist
    /// - `Err(AppError::BadRequest)` - No recipient could be determined
    pub async fn create(&self, param: CreateMessageParams) -> Result<Message, AppError> {
        let member = match param.member_id {
            Some(member_id) => Some(
                MemberRepository::new(self.db)
                    .find_by_id(member_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Member", member_id))?,
            ),
            None => None,
        };

        let recipient = param
            .recipient_phone
            .as_deref()
            .map(normalize_phone)
            .filter(|phone| !phone.is_empty())
            .or_else(|| member.map(|m| m.phone))
            .ok_or_else(|| AppError::BadRequest("A recipient phone number is required".to_string()))?;

        let message = MessageRepository::new(self.db)
            .create(param.member_id, recipient, param.channel, param.content)
            .await?;

        tracing::info!(
            message_id = message.id,
            channel = %message.channel.to_value(),
            "Message queued"
        );

        Ok(message)
    }

    pub async fn get(&self, id: i32) -> Result<Message, AppError> {
        MessageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Message", id))
    }

    pub async fn list(&self, filter: MessageFilter) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db).list(&filter).await?)
    }

    /// Marks a PENDING message SENT or FAILED.
    pub async fn mark(&self, id: i32, status: MessageStatus) -> Result<Message, AppError> {
        if status == MessageStatus::Pending {
            return Err(AppError::BadRequest(
                "A message can only be marked SENT or FAILED".to_string(),
            ));
        }

        let message = self.get(id).await?;
        if message.status != MessageStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Message {} is already {}",
                id,
                message.status.to_value()
            )));
        }

        MessageRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Message", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if MessageRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::not_found("Message", id));
        }

        Ok(())
    }
}
