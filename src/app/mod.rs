//! 应用层

pub mod product;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use product::handler::{health_check, AppState};

/// 组装完整路由：产品接口、健康检查以及日志/超时中间件
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(product::routes())
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
