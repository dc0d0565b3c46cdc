use crate::server::{
    data::member::MemberRepository,
    model::member::{MemberProfile, MemberSearchParams, NewMember, UpdateMemberParams},
};
use chrono::NaiveDate;
use entity::member::{Grade, MemberStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod max_registration_seq;
mod phone_taken;
mod update;

fn new_member(seq: i32, phone: &str) -> NewMember {
    NewMember {
        member_number: format!("M{}{}", seq, &phone[3..]),
        registration_seq: seq,
        name: format!("Member {}", seq),
        phone: phone.to_string(),
        profile: MemberProfile::default(),
        grade: Grade::Regular,
        coach_id: None,
        joined_on: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    }
}
