use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub member_number: String,
    #[sea_orm(unique)]
    pub registration_seq: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub grade: Grade,
    pub status: MemberStatus,
    pub coach_id: Option<i32>,
    pub memo: Option<String>,
    pub joined_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Member tier, used for classification only.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    #[sea_orm(string_value = "REGULAR")]
    Regular,
    #[sea_orm(string_value = "REGULAR_MEMBER")]
    RegularMember,
    #[sea_orm(string_value = "PLAYER")]
    Player,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
    #[sea_orm(string_value = "WITHDRAWN")]
    Withdrawn,
}
