//! Booking factory.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::booking::{BookingPurpose, BookingStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings.
///
/// Defaults to a PENDING one-hour lesson tomorrow from 10:00 to 11:00.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    facility_id: i32,
    member_id: Option<i32>,
    coach_id: Option<i32>,
    member_product_id: Option<i32>,
    purpose: BookingPurpose,
    status: BookingStatus,
    booking_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    product_deducted: bool,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, facility_id: i32) -> Self {
        Self {
            db,
            facility_id,
            member_id: None,
            coach_id: None,
            member_product_id: None,
            purpose: BookingPurpose::Lesson,
            status: BookingStatus::Pending,
            booking_date: Utc::now().date_naive() + Duration::days(1),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            product_deducted: false,
        }
    }

    pub fn member_id(mut self, member_id: Option<i32>) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn coach_id(mut self, coach_id: Option<i32>) -> Self {
        self.coach_id = coach_id;
        self
    }

    pub fn member_product_id(mut self, member_product_id: Option<i32>) -> Self {
        self.member_product_id = member_product_id;
        self
    }

    pub fn purpose(mut self, purpose: BookingPurpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn booking_date(mut self, booking_date: NaiveDate) -> Self {
        self.booking_date = booking_date;
        self
    }

    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn product_deducted(mut self, product_deducted: bool) -> Self {
        self.product_deducted = product_deducted;
        self
    }

    /// Builds and inserts the booking into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            facility_id: ActiveValue::Set(self.facility_id),
            member_id: ActiveValue::Set(self.member_id),
            coach_id: ActiveValue::Set(self.coach_id),
            member_product_id: ActiveValue::Set(self.member_product_id),
            purpose: ActiveValue::Set(self.purpose),
            status: ActiveValue::Set(self.status),
            booking_date: ActiveValue::Set(self.booking_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            participants: ActiveValue::Set(1),
            product_deducted: ActiveValue::Set(self.product_deducted),
            memo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING booking for the member at the facility with default times.
pub async fn create_booking(
    db: &DatabaseConnection,
    facility_id: i32,
    member_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, facility_id)
        .member_id(Some(member_id))
        .build()
        .await
}
