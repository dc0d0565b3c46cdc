use crate::server::{data::booking::BookingRepository, model::booking::BookingFilter};
use chrono::{NaiveDate, NaiveTime};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

mod has_overlap;
mod list;
mod member_ids_by_coach;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
}
