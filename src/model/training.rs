use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingLogDto {
    pub id: i32,
    pub member_id: i32,
    pub coach_id: Option<i32>,
    pub training_date: NaiveDate,
    pub content: String,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrainingLogDto {
    pub member_id: i32,
    pub coach_id: Option<i32>,
    pub training_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrainingLogDto {
    #[serde(default, deserialize_with = "crate::model::api::double_option")]
    pub coach_id: Option<Option<i32>>,
    pub training_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: Option<i32>,
}

/// Counting stats of one game or of a season. Missing fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BattingLineDto {
    #[validate(range(min = 0))]
    pub plate_appearances: i32,
    #[validate(range(min = 0))]
    pub at_bats: i32,
    #[validate(range(min = 0))]
    pub hits: i32,
    #[validate(range(min = 0))]
    pub doubles: i32,
    #[validate(range(min = 0))]
    pub triples: i32,
    #[validate(range(min = 0))]
    pub home_runs: i32,
    #[validate(range(min = 0))]
    pub runs_batted_in: i32,
    #[validate(range(min = 0))]
    pub walks: i32,
    #[validate(range(min = 0))]
    pub strikeouts: i32,
    #[validate(range(min = 0))]
    pub stolen_bases: i32,
}

/// Rate stats rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRatesDto {
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseballRecordDto {
    pub id: i32,
    pub member_id: i32,
    pub record_date: NaiveDate,
    #[serde(flatten)]
    pub line: BattingLineDto,
    pub rates: BattingRatesDto,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBaseballRecordDto {
    pub member_id: i32,
    pub record_date: NaiveDate,
    #[serde(flatten)]
    #[validate(nested)]
    pub line: BattingLineDto,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBaseballRecordDto {
    pub record_date: Option<NaiveDate>,
    #[validate(nested)]
    pub line: Option<BattingLineDto>,
    pub memo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonTotalDto {
    pub member_id: i32,
    pub year: i32,
    pub games: usize,
    #[serde(flatten)]
    pub line: BattingLineDto,
    pub rates: BattingRatesDto,
}

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub year: Option<i32>,
}
