use chrono::{DateTime, Utc};

use crate::model::notice::{AnnouncementDto, CreateAnnouncementDto, UpdateAnnouncementDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub active: bool,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            pinned: entity.pinned,
            active: entity.active,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            content: self.content,
            pinned: self.pinned,
            active: self.active,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub author_id: Option<i32>,
}

impl CreateAnnouncementParams {
    pub fn from_dto(dto: CreateAnnouncementDto, author_id: Option<i32>) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            pinned: dto.pinned,
            author_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnnouncementParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub pinned: Option<bool>,
    pub active: Option<bool>,
}

impl UpdateAnnouncementParams {
    pub fn from_dto(dto: UpdateAnnouncementDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            pinned: dto.pinned,
            active: dto.active,
        }
    }
}
