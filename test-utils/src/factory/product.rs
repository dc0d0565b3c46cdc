//! Product factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::product::ProductType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products.
///
/// # Example
///
/// ```rust,ignore
/// let monthly = ProductFactory::new(&db)
///     .product_type(ProductType::MonthlyPass)
///     .usage_count(None)
///     .valid_days(Some(30))
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    product_type: ProductType,
    price: i64,
    valid_days: Option<i32>,
    usage_count: Option<i32>,
    coach_id: Option<i32>,
    active: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory.
    ///
    /// Defaults to a 10-session COUNT_PASS valid for 90 days.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            product_type: ProductType::CountPass,
            price: 200_000,
            valid_days: Some(90),
            usage_count: Some(10),
            coach_id: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    /// Shorthand for a COUNT_PASS with the given session count.
    pub fn count_pass(mut self, sessions: i32) -> Self {
        self.product_type = ProductType::CountPass;
        self.usage_count = Some(sessions);
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn valid_days(mut self, valid_days: Option<i32>) -> Self {
        self.valid_days = valid_days;
        self
    }

    pub fn usage_count(mut self, usage_count: Option<i32>) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub fn coach_id(mut self, coach_id: Option<i32>) -> Self {
        self.coach_id = coach_id;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            product_type: ActiveValue::Set(self.product_type),
            price: ActiveValue::Set(self.price),
            valid_days: ActiveValue::Set(self.valid_days),
            usage_count: ActiveValue::Set(self.usage_count),
            coach_id: ActiveValue::Set(self.coach_id),
            active: ActiveValue::Set(self.active),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 10-session count pass product.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
