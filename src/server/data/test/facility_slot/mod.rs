use crate::server::{data::facility::FacilitySlotRepository, model::facility::Slot};
use chrono::NaiveTime;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod normalize_legacy_days;
mod replace;

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}
