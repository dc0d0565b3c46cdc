use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only ledger entry for a balance change of a member product.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member_product_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_product_id: i32,
    pub member_id: i32,
    pub kind: LedgerKind,
    pub change_amount: i32,
    pub remaining_after: Option<i32>,
    pub attendance_id: Option<i32>,
    pub payment_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub description: Option<String>,
    pub created_by: Option<String>,
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
pub enum LedgerKind {
    #[sea_orm(string_value = "CHARGE")]
    Charge,
    #[sea_orm(string_value = "DEDUCT")]
    Deduct,
    #[sea_orm(string_value = "ADJUST")]
    Adjust,
}
