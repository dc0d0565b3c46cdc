//! Staff announcements.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::notice::{Announcement, CreateAnnouncementParams, UpdateAnnouncementParams},
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAnnouncementParams) -> Result<Announcement, AppError> {
        let announcement = AnnouncementRepository::new(self.db).create(param).await?;

        tracing::info!(announcement_id = announcement.id, "Announcement posted");

        Ok(announcement)
    }

    pub async fn get(&self, id: i32) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement", id))
    }

    /// Pinned first, then newest first.
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db)
            .list(include_inactive)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateAnnouncementParams,
    ) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if AnnouncementRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::not_found("Announcement", id));
        }

        Ok(())
    }
}
