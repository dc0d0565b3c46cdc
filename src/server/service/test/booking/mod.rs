use crate::server::{
    error::AppError,
    model::{
        attendance::CheckInParams,
        booking::{CreateBookingParams, UpdateBookingParams},
    },
    service::{
        attendance::AttendanceService, booking::BookingService,
        member_product::MemberProductService,
    },
    util::day_of_week::day_of,
};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::{
    booking::{BookingPurpose, BookingStatus},
    member_product::MemberProductStatus,
    member_product_history::LedgerKind,
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, booking::BookingFactory, helpers::create_member_with_pass,
        member_product::MemberProductFactory,
    },
};

mod create;
mod lifecycle;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn tomorrow() -> NaiveDate {
    Utc::now().date_naive() + Duration::days(1)
}

fn booking_params(facility_id: i32, start: NaiveTime, end: NaiveTime) -> CreateBookingParams {
    CreateBookingParams {
        facility_id,
        member_id: None,
        coach_id: None,
        member_product_id: None,
        purpose: BookingPurpose::Lesson,
        booking_date: tomorrow(),
        start_time: start,
        end_time: end,
        participants: 1,
        memo: None,
    }
}
