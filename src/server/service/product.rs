//! Sellable products.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        coach::CoachRepository, member_product::MemberProductRepository,
        payment::PaymentRepository, product::ProductRepository,
    },
    error::AppError,
    model::product::{CreateProductParams, Product, UpdateProductParams},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product; count-based types arrive with their usage count
    /// already resolved by `CreateProductParams::from_dto`.
    pub async fn create(&self, param: CreateProductParams) -> Result<Product, AppError> {
        if let Some(coach_id) = param.coach_id {
            self.ensure_coach(coach_id).await?;
        }

        let product = ProductRepository::new(self.db).create(param).await?;

        tracing::info!(product_id = product.id, "Product created");

        Ok(product)
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all(active_only).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateProductParams) -> Result<Product, AppError> {
        if let Some(Some(coach_id)) = param.coach_id {
            self.ensure_coach(coach_id).await?;
        }

        ProductRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    /// Deletes a product that was never sold.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;

        let sold = MemberProductRepository::new(self.db)
            .exists_for_product(id)
            .await?
            || PaymentRepository::new(self.db)
                .exists_for_product(id)
                .await?;
        if sold {
            return Err(AppError::BadRequest(format!(
                "Product {} has been sold; deactivate it instead",
                id
            )));
        }

        ProductRepository::new(self.db).delete(id).await?;

        tracing::info!(product_id = id, "Product deleted");

        Ok(())
    }

    async fn ensure_coach(&self, coach_id: i32) -> Result<(), AppError> {
        CoachRepository::new(self.db)
            .find_by_id(coach_id)
            .await?
            .ok_or_else(|| AppError::not_found("Coach", coach_id))?;

        Ok(())
    }
}
