use chrono::NaiveTime;
use sea_orm::entity::prelude::*;

/// Weekly operating hours of a facility.
///
/// `day_of_week` is a legacy column: older rows hold English day names
/// ("MONDAY", "Tue", ...) while newer rows hold "1" (Monday) through "7"
/// (Sunday). Readers must accept both encodings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub facility_id: i32,
    pub day_of_week: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_open: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
