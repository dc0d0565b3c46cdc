use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

/// Repository providing database operations for sellable products.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a product. `usage_count` is stored as given.
    pub async fn create(&self, param: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            product_type: ActiveValue::Set(param.product_type),
            price: ActiveValue::Set(param.price),
            valid_days: ActiveValue::Set(param.valid_days),
            usage_count: ActiveValue::Set(param.usage_count),
            coach_id: ActiveValue::Set(param.coach_id),
            active: ActiveValue::Set(param.active),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets products ordered by name.
    ///
    /// # Arguments
    /// - `active_only` - Skip products no longer on sale
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find();
        if active_only {
            query = query.filter(entity::product::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateProductParams,
    ) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(valid_days) = param.valid_days {
            active_model.valid_days = ActiveValue::Set(Some(valid_days));
        }
        if let Some(usage_count) = param.usage_count {
            active_model.usage_count = ActiveValue::Set(Some(usage_count));
        }
        if let Some(coach_id) = param.coach_id {
            active_model.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }

    pub async fn clear_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .filter(entity::product::Column::CoachId.eq(coach_id))
            .col_expr(entity::product::Column::CoachId, Expr::value(Option::<i32>::None))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
