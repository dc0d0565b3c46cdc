use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::booking::{BookingPurpose, BookingStatus};

use crate::model::booking::{BookingDto, BookingListQuery, CreateBookingDto, UpdateBookingDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub facility_id: i32,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub purpose: BookingPurpose,
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: i32,
    pub product_deducted: bool,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            facility_id: entity.facility_id,
            member_id: entity.member_id,
            coach_id: entity.coach_id,
            member_product_id: entity.member_product_id,
            purpose: entity.purpose,
            status: entity.status,
            booking_date: entity.booking_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            participants: entity.participants,
            product_deducted: entity.product_deducted,
            memo: entity.memo,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            facility_id: self.facility_id,
            member_id: self.member_id,
            coach_id: self.coach_id,
            member_product_id: self.member_product_id,
            purpose: self.purpose,
            status: self.status,
            booking_date: self.booking_date,
            start_time: self.start_time,
            end_time: self.end_time,
            participants: self.participants,
            product_deducted: self.product_deducted,
            memo: self.memo,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub facility_id: i32,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub purpose: BookingPurpose,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: i32,
    pub memo: Option<String>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            facility_id: dto.facility_id,
            member_id: dto.member_id,
            coach_id: dto.coach_id,
            member_product_id: dto.member_product_id,
            purpose: dto.purpose,
            booking_date: dto.booking_date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            participants: dto.participants.unwrap_or(1),
            memo: dto.memo,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParams {
    pub booking_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub coach_id: Option<Option<i32>>,
    pub participants: Option<i32>,
    pub memo: Option<String>,
}

impl UpdateBookingParams {
    pub fn from_dto(dto: UpdateBookingDto) -> Self {
        Self {
            booking_date: dto.booking_date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            coach_id: dto.coach_id,
            participants: dto.participants,
            memo: dto.memo,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub facility_id: Option<i32>,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    pub fn from_query(query: BookingListQuery) -> Self {
        Self {
            from: query.from,
            to: query.to,
            facility_id: query.facility_id,
            member_id: query.member_id,
            coach_id: query.coach_id,
            status: query.status,
        }
    }
}
