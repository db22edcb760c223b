//! 产品数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 产品记录
///
/// `id` 由服务端在创建时生成，之后不可变更。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
}

/// 创建产品请求
///
/// 不做字段校验，缺失的字段按空值处理。
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub product_price: f64,
}

/// 更新产品请求（字段均可选，缺失的字段保留原值）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<f64>,
}
