use chrono::{DateTime, NaiveDate, Utc};

use crate::model::attendance::{AttendanceDto, AttendanceListQuery, CheckInDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub member_id: i32,
    pub booking_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub attendance_date: NaiveDate,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub memo: Option<String>,
}

impl Attendance {
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            booking_id: entity.booking_id,
            member_product_id: entity.member_product_id,
            attendance_date: entity.attendance_date,
            check_in_at: entity.check_in_at,
            check_out_at: entity.check_out_at,
            memo: entity.memo,
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            member_id: self.member_id,
            booking_id: self.booking_id,
            member_product_id: self.member_product_id,
            attendance_date: self.attendance_date,
            check_in_at: self.check_in_at,
            check_out_at: self.check_out_at,
            memo: self.memo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckInParams {
    pub member_id: i32,
    pub booking_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub memo: Option<String>,
    pub created_by: Option<String>,
}

impl CheckInParams {
    pub fn from_dto(dto: CheckInDto, created_by: Option<String>) -> Self {
        Self {
            member_id: dto.member_id,
            booking_id: dto.booking_id,
            member_product_id: dto.member_product_id,
            memo: dto.memo,
            created_by,
        }
    }
}

/// Values for a new attendance row.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub member_id: i32,
    pub booking_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub attendance_date: NaiveDate,
    pub check_in_at: DateTime<Utc>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub member_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn from_query(query: AttendanceListQuery) -> Self {
        Self {
            member_id: query.member_id,
            from: query.from,
            to: query.to,
        }
    }
}
