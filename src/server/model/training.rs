//! Training logs and per-game batting records.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::training::{
    BaseballRecordDto, BattingLineDto, BattingRatesDto, CreateBaseballRecordDto,
    CreateTrainingLogDto, SeasonTotalDto, TrainingLogDto, UpdateBaseballRecordDto,
    UpdateTrainingLogDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingLog {
    pub id: i32,
    pub member_id: i32,
    pub coach_id: Option<i32>,
    pub training_date: NaiveDate,
    pub content: String,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl TrainingLog {
    pub fn from_entity(entity: entity::training_log::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            coach_id: entity.coach_id,
            training_date: entity.training_date,
            content: entity.content,
            duration_minutes: entity.duration_minutes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TrainingLogDto {
        TrainingLogDto {
            id: self.id,
            member_id: self.member_id,
            coach_id: self.coach_id,
            training_date: self.training_date,
            content: self.content,
            duration_minutes: self.duration_minutes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrainingLogParams {
    pub member_id: i32,
    pub coach_id: Option<i32>,
    pub training_date: Option<NaiveDate>,
    pub content: String,
    pub duration_minutes: Option<i32>,
}

impl CreateTrainingLogParams {
    pub fn from_dto(dto: CreateTrainingLogDto) -> Self {
        Self {
            member_id: dto.member_id,
            coach_id: dto.coach_id,
            training_date: dto.training_date,
            content: dto.content,
            duration_minutes: dto.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingLogParams {
    pub coach_id: Option<Option<i32>>,
    pub training_date: Option<NaiveDate>,
    pub content: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl UpdateTrainingLogParams {
    pub fn from_dto(dto: UpdateTrainingLogDto) -> Self {
        Self {
            coach_id: dto.coach_id,
            training_date: dto.training_date,
            content: dto.content,
            duration_minutes: dto.duration_minutes,
        }
    }
}

/// Counting stats of a game or an aggregate of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattingLine {
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
}

impl BattingLine {
    pub fn from_dto(dto: BattingLineDto) -> Self {
        Self {
            plate_appearances: dto.plate_appearances,
            at_bats: dto.at_bats,
            hits: dto.hits,
            doubles: dto.doubles,
            triples: dto.triples,
            home_runs: dto.home_runs,
            runs_batted_in: dto.runs_batted_in,
            walks: dto.walks,
            strikeouts: dto.strikeouts,
            stolen_bases: dto.stolen_bases,
        }
    }

    pub fn into_dto(self) -> BattingLineDto {
        BattingLineDto {
            plate_appearances: self.plate_appearances,
            at_bats: self.at_bats,
            hits: self.hits,
            doubles: self.doubles,
            triples: self.triples,
            home_runs: self.home_runs,
            runs_batted_in: self.runs_batted_in,
            walks: self.walks,
            strikeouts: self.strikeouts,
            stolen_bases: self.stolen_bases,
        }
    }

    pub fn add(self, other: BattingLine) -> Self {
        Self {
            plate_appearances: self.plate_appearances + other.plate_appearances,
            at_bats: self.at_bats + other.at_bats,
            hits: self.hits + other.hits,
            doubles: self.doubles + other.doubles,
            triples: self.triples + other.triples,
            home_runs: self.home_runs + other.home_runs,
            runs_batted_in: self.runs_batted_in + other.runs_batted_in,
            walks: self.walks + other.walks,
            strikeouts: self.strikeouts + other.strikeouts,
            stolen_bases: self.stolen_bases + other.stolen_bases,
        }
    }

    pub fn total_bases(&self) -> i32 {
        let singles = self.hits - self.doubles - self.triples - self.home_runs;
        singles + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }

    /// AVG = H / AB, OBP = (H + BB) / (AB + BB), SLG = TB / AB. Zero denominators yield 0.
    pub fn rates(&self) -> BattingRatesDto {
        BattingRatesDto {
            batting_average: ratio(self.hits, self.at_bats),
            on_base_percentage: ratio(self.hits + self.walks, self.at_bats + self.walks),
            slugging_percentage: ratio(self.total_bases(), self.at_bats),
        }
    }
}

fn ratio(numerator: i32, denominator: i32) -> f64 {
    if denominator <= 0 {
        return 0.0;
    }
    (f64::from(numerator) / f64::from(denominator) * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseballRecord {
    pub id: i32,
    pub member_id: i32,
    pub record_date: NaiveDate,
    pub line: BattingLine,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BaseballRecord {
    pub fn from_entity(entity: entity::baseball_record::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            record_date: entity.record_date,
            line: BattingLine {
                plate_appearances: entity.plate_appearances,
                at_bats: entity.at_bats,
                hits: entity.hits,
                doubles: entity.doubles,
                triples: entity.triples,
                home_runs: entity.home_runs,
                runs_batted_in: entity.runs_batted_in,
                walks: entity.walks,
                strikeouts: entity.strikeouts,
                stolen_bases: entity.stolen_bases,
            },
            memo: entity.memo,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BaseballRecordDto {
        BaseballRecordDto {
            id: self.id,
            member_id: self.member_id,
            record_date: self.record_date,
            rates: self.line.rates(),
            line: self.line.into_dto(),
            memo: self.memo,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBaseballRecordParams {
    pub member_id: i32,
    pub record_date: NaiveDate,
    pub line: BattingLine,
    pub memo: Option<String>,
}

impl CreateBaseballRecordParams {
    pub fn from_dto(dto: CreateBaseballRecordDto) -> Self {
        Self {
            member_id: dto.member_id,
            record_date: dto.record_date,
            line: BattingLine::from_dto(dto.line),
            memo: dto.memo,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBaseballRecordParams {
    pub record_date: Option<NaiveDate>,
    pub line: Option<BattingLine>,
    pub memo: Option<String>,
}

impl UpdateBaseballRecordParams {
    pub fn from_dto(dto: UpdateBaseballRecordDto) -> Self {
        Self {
            record_date: dto.record_date,
            line: dto.line.map(BattingLine::from_dto),
            memo: dto.memo,
        }
    }
}

/// Aggregated batting line of a member over one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotal {
    pub member_id: i32,
    pub year: i32,
    pub games: usize,
    pub line: BattingLine,
}

impl SeasonTotal {
    pub fn from_records(member_id: i32, year: i32, records: &[BaseballRecord]) -> Self {
        let line = records
            .iter()
            .fold(BattingLine::default(), |acc, record| acc.add(record.line));

        Self {
            member_id,
            year,
            games: records.len(),
            line,
        }
    }

    pub fn into_dto(self) -> SeasonTotalDto {
        SeasonTotalDto {
            member_id: self.member_id,
            year: self.year,
            games: self.games,
            rates: self.line.rates(),
            line: self.line.into_dto(),
        }
    }
}
