use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub product_type: ProductType,
    pub price: i64,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
    pub coach_id: Option<i32>,
    pub active: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[sea_orm(string_value = "SINGLE_USE")]
    SingleUse,
    #[sea_orm(string_value = "TIME_PASS")]
    TimePass,
    #[sea_orm(string_value = "COUNT_PASS")]
    CountPass,
    #[sea_orm(string_value = "MONTHLY_PASS")]
    MonthlyPass,
    #[sea_orm(string_value = "TEAM_PACKAGE")]
    TeamPackage,
}

impl ProductType {
    /// Whether passes of this type always track a session count.
    pub fn is_count_based(&self) -> bool {
        matches!(
            self,
            ProductType::SingleUse | ProductType::CountPass | ProductType::TeamPackage
        )
    }
}
