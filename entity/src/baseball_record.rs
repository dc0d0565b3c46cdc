use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

/// Batting line of a member for one game or practice match.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "baseball_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub record_date: NaiveDate,
    pub plate_appearances: i32,
    pub at_bats: i32,
    pub hits: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub runs_batted_in: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub stolen_bases: i32,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
