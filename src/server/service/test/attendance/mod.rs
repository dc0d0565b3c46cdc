use crate::server::{
    error::AppError,
    model::attendance::CheckInParams,
    service::{
        attendance::AttendanceService, booking::BookingService,
        member_product::MemberProductService,
    },
};
use entity::{booking::BookingStatus, member::MemberStatus};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, booking::BookingFactory, helpers::create_member_with_pass, member::MemberFactory,
        member_product::MemberProductFactory,
    },
};

mod check_in;
mod delete;

fn check_in_params(member_id: i32) -> CheckInParams {
    CheckInParams {
        member_id,
        booking_id: None,
        member_product_id: None,
        memo: None,
        created_by: Some("front".to_string()),
    }
}
