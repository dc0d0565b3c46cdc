use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::product::{CreateProductDto, ProductListQuery, UpdateProductDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            product::{CreateProductParams, UpdateProductParams},
        },
        service::product::ProductService,
        state::AppState,
    },
};

/// POST /api/products - Create a product
///
/// Count-based products without `usage_count` get the configured default.
///
/// # Authentication
/// Requires CREATE on PRODUCT
///
/// # Returns
/// - `201 Created`: JSON ProductDto
/// - `400 Bad Request`: Validation failure or unknown coach
pub async fn create_product(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Product)])
        .await?;

    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload, &state.defaults))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// GET /api/products - List products
///
/// # Authentication
/// Requires VIEW on PRODUCT
///
/// # Query Parameters
/// - `active_only`: Hide inactive products (default false)
///
/// # Returns
/// - `200 OK`: JSON array of ProductDto
pub async fn list_products(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Product)])
        .await?;

    let products = ProductService::new(&state.db)
        .list(query.active_only)
        .await?;
    let products_dto: Vec<_> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(products_dto)))
}

/// GET /api/products/{id} - Get one product
///
/// # Authentication
/// Requires VIEW on PRODUCT
///
/// # Returns
/// - `200 OK`: JSON ProductDto
/// - `400 Bad Request`: Product not found
pub async fn get_product(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Product)])
        .await?;

    let product = ProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// PUT /api/products/{id} - Update a product
///
/// Passes already issued keep their counts and expiry.
///
/// # Authentication
/// Requires EDIT on PRODUCT
///
/// # Returns
/// - `200 OK`: JSON ProductDto after the update
/// - `400 Bad Request`: Validation failure, product or coach not found
pub async fn update_product(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Product)])
        .await?;

    let product = ProductService::new(&state.db)
        .update(id, UpdateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// DELETE /api/products/{id} - Delete a product that was never sold
///
/// # Authentication
/// Requires DELETE on PRODUCT
///
/// # Returns
/// - `204 No Content`: Product deleted
/// - `400 Bad Request`: Product not found or already sold
pub async fn delete_product(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Product)])
        .await?;

    ProductService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
