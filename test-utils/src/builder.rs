use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then
/// call `build()` to create the configured in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Coach, Member};
///
/// let test = TestBuilder::new()
///     .with_table(Coach)
///     .with_table(Member)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables are created in the order they were added.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for member operations: Coach and Member.
    pub fn with_member_tables(self) -> Self {
        self.with_table(Coach).with_table(Member)
    }

    /// Adds the tables needed for the pass ledger.
    ///
    /// Includes the member tables plus Product, MemberProduct and
    /// MemberProductHistory.
    pub fn with_ledger_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Product)
            .with_table(MemberProduct)
            .with_table(MemberProductHistory)
    }

    /// Adds the tables needed for bookings and attendance.
    ///
    /// Includes the ledger tables plus Facility, FacilitySlot, Booking and
    /// Attendance.
    pub fn with_booking_tables(self) -> Self {
        self.with_ledger_tables()
            .with_table(Facility)
            .with_table(FacilitySlot)
            .with_table(Booking)
            .with_table(Attendance)
    }

    /// Adds the tables needed for login and permission checks: User and RolePermission.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(RolePermission)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for router-level tests that touch several modules.
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables()
            .with_booking_tables()
            .with_table(Payment)
            .with_table(TrainingLog)
            .with_table(BaseballRecord)
            .with_table(Announcement)
            .with_table(Message)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
