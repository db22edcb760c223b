//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 核心错误类型
///
/// 本服务只有一种领域错误：实体不存在。
/// 错误响应体为纯文本消息，与接口约定保持一致。
#[derive(Debug)]
pub enum CoreError {
    NotFound(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
        }
    }
}
