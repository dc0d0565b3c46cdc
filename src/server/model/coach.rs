use chrono::{DateTime, Utc};

use crate::model::coach::{CoachDto, CreateCoachDto, UpdateCoachDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: bool,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Coach {
    pub fn from_entity(entity: entity::coach::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            specialty: entity.specialty,
            active: entity.active,
            memo: entity.memo,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CoachDto {
        CoachDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            specialty: self.specialty,
            active: self.active,
            memo: self.memo,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCoachParams {
    pub name: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: bool,
    pub memo: Option<String>,
}

impl CreateCoachParams {
    pub fn from_dto(dto: CreateCoachDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            specialty: dto.specialty,
            active: dto.active.unwrap_or(true),
            memo: dto.memo,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCoachParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: Option<bool>,
    pub memo: Option<String>,
}

impl UpdateCoachParams {
    pub fn from_dto(dto: UpdateCoachDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            specialty: dto.specialty,
            active: dto.active,
            memo: dto.memo,
        }
    }
}
