//! Coach factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coaches.
pub struct CoachFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: Option<String>,
    specialty: Option<String>,
    active: bool,
}

impl<'a> CoachFactory<'a> {
    /// Creates a new CoachFactory.
    ///
    /// Defaults:
    /// - name: `"Coach {id}"`
    /// - specialty: `Some("Batting")`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Coach {}", id),
            phone: Some(format!("0109{:07}", id)),
            specialty: Some("Batting".to_string()),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialty(mut self, specialty: Option<String>) -> Self {
        self.specialty = specialty;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the coach entity into the database.
    pub async fn build(self) -> Result<entity::coach::Model, DbErr> {
        entity::coach::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            specialty: ActiveValue::Set(self.specialty),
            active: ActiveValue::Set(self.active),
            memo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active coach with default values.
pub async fn create_coach(db: &DatabaseConnection) -> Result<entity::coach::Model, DbErr> {
    CoachFactory::new(db).build().await
}
