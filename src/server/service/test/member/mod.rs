use crate::server::{
    error::AppError,
    model::member::{CreateMemberParams, MemberProfile, MemberSearchParams, UpdateMemberParams},
    service::member::MemberService,
};
use chrono::NaiveDate;
use entity::member::{Grade, MemberStatus};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn create_params(name: &str, phone: &str) -> CreateMemberParams {
    CreateMemberParams {
        name: name.to_string(),
        phone: phone.to_string(),
        profile: MemberProfile::default(),
        grade: Grade::Regular,
        coach_id: None,
        joined_on: None,
    }
}
