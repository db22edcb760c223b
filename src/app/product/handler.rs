//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{CreateProductRequest, Product, UpdateProductRequest},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 获取所有产品
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.list())
}

/// 创建新产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> (StatusCode, Json<Product>) {
    let product = state.product_service.create(payload);
    (StatusCode::CREATED, Json(product))
}

/// 获取特定产品
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get(&id)?;
    Ok(Json(product))
}

/// 更新产品
///
/// 更新成功与创建一样返回 201。
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.update(&id, payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 删除产品
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, CoreError> {
    state.product_service.delete(&id)?;
    Ok("Product deleted.")
}
