use crate::server::{
    error::AppError,
    service::{coach::CoachService, member::MemberService, user::UserService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, booking::BookingFactory, member::MemberFactory,
        member_product::MemberProductFactory, user::UserFactory,
    },
};

mod delete;
mod students;
