use chrono::{DateTime, Utc};
use entity::product::ProductType;

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::config::Defaults,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            product_type: entity.product_type,
            price: entity.price,
            valid_days: entity.valid_days,
            usage_count: entity.usage_count,
            coach_id: entity.coach_id,
            active: entity.active,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            product_type: self.product_type,
            price: self.price,
            valid_days: self.valid_days,
            usage_count: self.usage_count,
            coach_id: self.coach_id,
            active: self.active,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Usage count stored for a new product.
///
/// SINGLE_USE is always 1. Other count-based types fall back to the configured
/// default; time-based types stay uncounted unless a count is given.
pub fn resolve_usage_count(
    product_type: ProductType,
    requested: Option<i32>,
    default_usage_count: i32,
) -> Option<i32> {
    match product_type {
        ProductType::SingleUse => Some(1),
        t if t.is_count_based() => Some(requested.unwrap_or(default_usage_count)),
        _ => requested,
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub product_type: ProductType,
    pub price: i64,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
    pub coach_id: Option<i32>,
    pub active: bool,
    pub description: Option<String>,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto, defaults: &Defaults) -> Self {
        Self {
            usage_count: resolve_usage_count(
                dto.product_type,
                dto.usage_count,
                defaults.product_usage_count,
            ),
            name: dto.name,
            product_type: dto.product_type,
            price: dto.price,
            valid_days: dto.valid_days,
            coach_id: dto.coach_id,
            active: dto.active.unwrap_or(true),
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
    pub coach_id: Option<Option<i32>>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            valid_days: dto.valid_days,
            usage_count: dto.usage_count,
            coach_id: dto.coach_id,
            active: dto.active,
            description: dto.description,
        }
    }
}
