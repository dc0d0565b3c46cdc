//! Facility and weekly opening hours.

use chrono::NaiveTime;

use crate::model::facility::{
    CreateFacilityDto, FacilityDto, SlotDto, SlotInputDto, UpdateFacilityDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub capacity: i32,
    pub hourly_rate: i64,
    pub active: bool,
    pub description: Option<String>,
}

impl Facility {
    pub fn from_entity(entity: entity::facility::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
            capacity: entity.capacity,
            hourly_rate: entity.hourly_rate,
            active: entity.active,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> FacilityDto {
        FacilityDto {
            id: self.id,
            name: self.name,
            kind: self.kind,
            capacity: self.capacity,
            hourly_rate: self.hourly_rate,
            active: self.active,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFacilityParams {
    pub name: String,
    pub kind: String,
    pub capacity: i32,
    pub hourly_rate: i64,
    pub active: bool,
    pub description: Option<String>,
}

impl CreateFacilityParams {
    pub fn from_dto(dto: CreateFacilityDto) -> Self {
        Self {
            name: dto.name,
            kind: dto.kind,
            capacity: dto.capacity,
            hourly_rate: dto.hourly_rate,
            active: dto.active.unwrap_or(true),
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFacilityParams {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub capacity: Option<i32>,
    pub hourly_rate: Option<i64>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

impl UpdateFacilityParams {
    pub fn from_dto(dto: UpdateFacilityDto) -> Self {
        Self {
            name: dto.name,
            kind: dto.kind,
            capacity: dto.capacity,
            hourly_rate: dto.hourly_rate,
            active: dto.active,
            description: dto.description,
        }
    }
}

/// Opening hours for one weekday; `day_of_week` is 1 (Monday) through 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub day_of_week: u8,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_open: bool,
}

impl Slot {
    /// Returns `None` for rows whose legacy day value cannot be parsed.
    pub fn from_entity(entity: entity::facility_slot::Model) -> Option<Self> {
        let day_of_week = crate::server::util::day_of_week::parse_day(&entity.day_of_week)?;
        Some(Self {
            day_of_week,
            open_time: entity.open_time,
            close_time: entity.close_time,
            is_open: entity.is_open,
        })
    }

    /// Returns `None` when the day value is not a weekday.
    pub fn from_input(dto: SlotInputDto) -> Option<Self> {
        let day_of_week = crate::server::util::day_of_week::parse_day_value(&dto.day_of_week)?;
        Some(Self {
            day_of_week,
            open_time: dto.open_time,
            close_time: dto.close_time,
            is_open: dto.is_open,
        })
    }

    /// Whether `[start, end]` lies inside opening hours.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.is_open && self.open_time <= start && end <= self.close_time
    }

    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            day_of_week: self.day_of_week,
            open_time: self.open_time,
            close_time: self.close_time,
            is_open: self.is_open,
        }
    }
}
