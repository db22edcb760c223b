//! 产品模块

pub mod handler;
pub mod model;
pub mod service;

use axum::{routing::get, Router};

use self::handler::AppState;
use super::invalid_route;

/// 构建产品路由
///
/// `/products` 与 `/products/` 等价，两者都注册。
/// 每条路由都以 `invalid_route` 作为方法回退，
/// 已注册路径上的未注册方法与未知路径走同一个 404 响应。
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products)
                .post(handler::create_product)
                .fallback(invalid_route),
        )
        .route(
            "/products/",
            get(handler::list_products)
                .post(handler::create_product)
                .fallback(invalid_route),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product)
                .fallback(invalid_route),
        )
        .with_state(state)
}
