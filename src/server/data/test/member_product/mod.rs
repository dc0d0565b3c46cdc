use crate::server::{
    data::member_product::MemberProductRepository,
    model::member_product::{NewMemberProduct, UpdateMemberProductParams},
};
use chrono::{Duration, NaiveDate, Utc};
use entity::member_product::MemberProductStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_member_with_pass, member_product::MemberProductFactory},
};

mod compare_and_set_remaining;
mod create;
mod expire_overdue;
