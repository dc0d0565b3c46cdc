//! Member factory for creating test member entities.
//!
//! The factory writes `member_number` and `registration_seq` verbatim; it does
//! not run the numbering rules applied by the member service.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::member::{Grade, MemberStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .phone("01012345678")
///     .coach_id(Some(coach.id))
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: String,
    registration_seq: i32,
    member_number: String,
    grade: Grade,
    status: MemberStatus,
    coach_id: Option<i32>,
    joined_on: NaiveDate,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"`
    /// - phone: `"010"` followed by the 8-digit zero-padded id
    /// - registration_seq: id
    /// - member_number: `"M{id}{phone suffix}"`
    /// - grade / status: `REGULAR` / `ACTIVE`
    /// - joined_on: today
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let suffix = format!("{:08}", id % 100_000_000);
        Self {
            db,
            name: format!("Member {}", id),
            phone: format!("010{}", suffix),
            registration_seq: id as i32,
            member_number: format!("M{}{}", id, suffix),
            grade: Grade::Regular,
            status: MemberStatus::Active,
            coach_id: None,
            joined_on: Utc::now().date_naive(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn registration_seq(mut self, registration_seq: i32) -> Self {
        self.registration_seq = registration_seq;
        self
    }

    pub fn member_number(mut self, member_number: impl Into<String>) -> Self {
        self.member_number = member_number.into();
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    pub fn status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    pub fn coach_id(mut self, coach_id: Option<i32>) -> Self {
        self.coach_id = coach_id;
        self
    }

    pub fn joined_on(mut self, joined_on: NaiveDate) -> Self {
        self.joined_on = joined_on;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            member_number: ActiveValue::Set(self.member_number),
            registration_seq: ActiveValue::Set(self.registration_seq),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            birth_date: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            height_cm: ActiveValue::Set(None),
            weight_kg: ActiveValue::Set(None),
            batting_hand: ActiveValue::Set(None),
            throwing_hand: ActiveValue::Set(None),
            position: ActiveValue::Set(None),
            school: ActiveValue::Set(None),
            guardian_phone: ActiveValue::Set(None),
            grade: ActiveValue::Set(self.grade),
            status: ActiveValue::Set(self.status),
            coach_id: ActiveValue::Set(self.coach_id),
            memo: ActiveValue::Set(None),
            joined_on: ActiveValue::Set(self.joined_on),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
