use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored override of one cell row of the role permission matrix.
///
/// `role` is kept as a free string so overrides can exist for role names that
/// have no built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role: String,
    pub area: Area,
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Domain area gated by the permission matrix.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Area {
    #[sea_orm(string_value = "MEMBER")]
    Member,
    #[sea_orm(string_value = "COACH")]
    Coach,
    #[sea_orm(string_value = "FACILITY")]
    Facility,
    #[sea_orm(string_value = "BOOKING")]
    Booking,
    #[sea_orm(string_value = "PRODUCT")]
    Product,
    #[sea_orm(string_value = "MEMBER_PRODUCT")]
    MemberProduct,
    #[sea_orm(string_value = "PAYMENT")]
    Payment,
    #[sea_orm(string_value = "ATTENDANCE")]
    Attendance,
    #[sea_orm(string_value = "TRAINING")]
    Training,
    #[sea_orm(string_value = "ANNOUNCEMENT")]
    Announcement,
    #[sea_orm(string_value = "MESSAGE")]
    Message,
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "SETTINGS")]
    Settings,
}
