use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub active: bool,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnnouncementDto {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnnouncementDto {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    pub pinned: Option<bool>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnouncementListQuery {
    /// Include inactive announcements.
    #[serde(default)]
    pub all: bool,
}
