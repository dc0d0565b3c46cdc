//! Member product (issued pass) factory.
//!
//! Inserts the balance row only. Ledger entries are not written, so tests that
//! check ledger consistency should issue passes through the service instead.

use chrono::{Duration, NaiveDate, Utc};
use entity::member_product::MemberProductStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test passes.
pub struct MemberProductFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    product_id: i32,
    coach_id: Option<i32>,
    total_count: Option<i32>,
    remaining_count: Option<i32>,
    starts_on: NaiveDate,
    expires_on: Option<NaiveDate>,
    status: MemberProductStatus,
}

impl<'a> MemberProductFactory<'a> {
    /// Creates a new MemberProductFactory.
    ///
    /// Defaults:
    /// - 10 of 10 sessions remaining
    /// - starts today, expires in 90 days
    /// - status: `ACTIVE`
    pub fn new(db: &'a DatabaseConnection, member_id: i32, product_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            member_id,
            product_id,
            coach_id: None,
            total_count: Some(10),
            remaining_count: Some(10),
            starts_on: today,
            expires_on: Some(today + Duration::days(90)),
            status: MemberProductStatus::Active,
        }
    }

    /// Sets total and remaining session counts.
    pub fn counts(mut self, total: i32, remaining: i32) -> Self {
        self.total_count = Some(total);
        self.remaining_count = Some(remaining);
        self
    }

    /// Makes the pass uncounted (time pass).
    pub fn uncounted(mut self) -> Self {
        self.total_count = None;
        self.remaining_count = None;
        self
    }

    pub fn coach_id(mut self, coach_id: Option<i32>) -> Self {
        self.coach_id = coach_id;
        self
    }

    pub fn starts_on(mut self, starts_on: NaiveDate) -> Self {
        self.starts_on = starts_on;
        self
    }

    pub fn expires_on(mut self, expires_on: Option<NaiveDate>) -> Self {
        self.expires_on = expires_on;
        self
    }

    pub fn status(mut self, status: MemberProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the pass into the database.
    pub async fn build(self) -> Result<entity::member_product::Model, DbErr> {
        let now = Utc::now();
        entity::member_product::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            product_id: ActiveValue::Set(self.product_id),
            coach_id: ActiveValue::Set(self.coach_id),
            total_count: ActiveValue::Set(self.total_count),
            remaining_count: ActiveValue::Set(self.remaining_count),
            purchased_at: ActiveValue::Set(now),
            starts_on: ActiveValue::Set(self.starts_on),
            expires_on: ActiveValue::Set(self.expires_on),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 10-session pass for the member and product.
pub async fn create_member_product(
    db: &DatabaseConnection,
    member_id: i32,
    product_id: i32,
) -> Result<entity::member_product::Model, DbErr> {
    MemberProductFactory::new(db, member_id, product_id)
        .build()
        .await
}
