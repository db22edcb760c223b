//! 产品 API 服务器入口

use tokio::net::TcpListener;
use tracing::info;

use product_api::app;
use product_api::infrastructure::{config::Config, logger::Logger};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init("info");

    let config = Config::from_env();

    let app = app::create_app();

    // 绑定地址
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap_or_else(|e| panic!("无法绑定到端口 {}: {}", config.port, e));

    info!("🚀 产品 API 服务器运行在 http://localhost:{}", config.port);
    info!("📖 API 端点:");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
