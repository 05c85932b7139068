//! 产品资源：模型、服务、处理器与路由

pub mod handler;
pub mod model;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/product",
            get(handler::list_products)
                .post(handler::create_product)
                .put(handler::update_product),
        )
        .route(
            "/api/product/:id",
            post(handler::lookup_product)
                .get(handler::get_product)
                .delete(handler::delete_product),
        )
}
