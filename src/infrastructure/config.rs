//! 服务配置

use std::env;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 4000;

/// 服务配置
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 监听端口
    pub port: u16,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// `PORT` 未设置或无法解析时使用默认端口。
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
