//! 产品处理器

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use super::{model::Product, service::ProductService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// GET /api/product
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// POST /api/product/:id
///
/// 查询接口：找不到时返回 200 和空响应体，而不是 404
pub async fn lookup_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, CoreError> {
    let response = match state.product_service.get_product(id).await? {
        Some(product) => Json(product).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// GET /api/product/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, CoreError> {
    state
        .product_service
        .get_product(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(format!("产品 {} 不存在", id)))
}

/// POST /api/product
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> Result<impl IntoResponse, CoreError> {
    let product = state.product_service.create_product(payload).await?;
    let location = format!("/api/product/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// PUT /api/product
pub async fn update_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> Result<StatusCode, CoreError> {
    state.product_service.update_product(payload).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/product/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::OK)
}

/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    state.product_service.check_store().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
