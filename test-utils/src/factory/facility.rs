//! Facility and weekly slot factories.

use crate::factory::helpers::next_id;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test facilities.
pub struct FacilityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: String,
    capacity: i32,
    hourly_rate: i64,
    active: bool,
}

impl<'a> FacilityFactory<'a> {
    /// Creates a new FacilityFactory.
    ///
    /// Defaults:
    /// - name: `"Cage {id}"`
    /// - kind: `"BATTING_CAGE"`
    /// - capacity: `4`, hourly_rate: `30000`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cage {}", id),
            kind: "BATTING_CAGE".to_string(),
            capacity: 4,
            hourly_rate: 30_000,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the facility entity into the database.
    pub async fn build(self) -> Result<entity::facility::Model, DbErr> {
        entity::facility::ActiveModel {
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            capacity: ActiveValue::Set(self.capacity),
            hourly_rate: ActiveValue::Set(self.hourly_rate),
            active: ActiveValue::Set(self.active),
            description: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active facility with default values.
pub async fn create_facility(db: &DatabaseConnection) -> Result<entity::facility::Model, DbErr> {
    FacilityFactory::new(db).build().await
}

/// Inserts a weekly slot row as-is.
///
/// `day_of_week` is stored verbatim, which lets tests seed legacy encodings
/// such as `"MONDAY"`.
///
/// # Arguments
/// - `db` - Database connection
/// - `facility_id` - Facility the slot belongs to
/// - `day_of_week` - Raw day value
/// - `open_time` / `close_time` - Opening hours
/// - `is_open` - Whether the facility opens on that day
pub async fn create_slot(
    db: &DatabaseConnection,
    facility_id: i32,
    day_of_week: impl Into<String>,
    open_time: NaiveTime,
    close_time: NaiveTime,
    is_open: bool,
) -> Result<entity::facility_slot::Model, DbErr> {
    entity::facility_slot::ActiveModel {
        facility_id: ActiveValue::Set(facility_id),
        day_of_week: ActiveValue::Set(day_of_week.into()),
        open_time: ActiveValue::Set(open_time),
        close_time: ActiveValue::Set(close_time),
        is_open: ActiveValue::Set(is_open),
        ..Default::default()
    }
    .insert(db)
    .await
}
