//! 应用模块

pub mod product;

use axum::{http::StatusCode, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use self::product::{handler::AppState, service::ProductService};

/// 组装完整的应用路由
pub fn create_app() -> Router {
    create_app_with_service(ProductService::new())
}

/// 使用给定的产品服务组装路由
///
/// 服务在进程启动时构建一次并注入，便于测试替换。
pub fn create_app_with_service(product_service: ProductService) -> Router {
    let state = AppState { product_service };

    product::router(state)
        .fallback(invalid_route)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
}

/// 未匹配请求的默认响应
///
/// 路径未注册、或路径已注册但方法未注册，都走这里。
pub(crate) async fn invalid_route() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Invalid route")
}
