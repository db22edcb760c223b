//! # 产品 API 服务
//!
//! 基于 Axum 的内存产品 CRUD 服务：
//! - 产品集合保存在进程内存中（Mutex 保护的有序序列）
//! - 提供列表、创建、查询、更新、删除五种操作
//! - 未匹配的路由统一返回 404

pub mod app;
pub mod core;
pub mod infrastructure;
