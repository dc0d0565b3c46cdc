use chrono::{DateTime, Utc};
use entity::product::ProductType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub product_type: ProductType,
    pub price: i64,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
    pub coach_id: Option<i32>,
    pub active: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    pub product_type: ProductType,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,
    #[validate(range(min = 1, message = "Valid days must be at least 1"))]
    pub valid_days: Option<i32>,
    #[validate(range(min = 1, message = "Usage count must be at least 1"))]
    pub usage_count: Option<i32>,
    pub coach_id: Option<i32>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i64>,
    #[validate(range(min = 1, message = "Valid days must be at least 1"))]
    pub valid_days: Option<i32>,
    #[validate(range(min = 1, message = "Usage count must be at least 1"))]
    pub usage_count: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::api::double_option")]
    pub coach_id: Option<Option<i32>>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub active_only: bool,
}
